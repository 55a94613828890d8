extern crate ansi_term;
extern crate linefeed;

use ansi_term::Style;
use linefeed::{Interface, ReadResult, Signal, Terminal};
use std::fs::File;
use std::io::{BufReader, ErrorKind, Read};
use tape::error;
use tape::lang::{parse_file, Error};

pub fn main() {
    if let Err(error) = main_loop() {
        eprintln!("{}", error);
    }
}

fn main_loop() -> std::io::Result<()> {
    let command = Interface::new("tape")?;
    command.set_report_signal(Signal::Interrupt, true);
    command.set_prompt("> ")?;
    command.write_fmt(format_args!("TAPE\nREADY.\n"))?;
    loop {
        let string = match command.read_line()? {
            ReadResult::Input(string) => string,
            ReadResult::Signal(_) | ReadResult::Eof => break,
        };
        if string.trim().is_empty() {
            continue;
        }
        if let Some(filename) = string.trim().strip_prefix(".load ") {
            match load(filename.trim()) {
                Ok(source) => show(&command, &source)?,
                Err(error) => show_error(&command, &error)?,
            }
        } else {
            show(&command, &string)?;
        }
        command.add_history_unique(string);
    }
    Ok(())
}

fn show<T: Terminal>(command: &Interface<T>, source: &str) -> std::io::Result<()> {
    match parse_file(source).wait() {
        Ok(tree) => command.write_fmt(format_args!("{}\n", tree)),
        Err(error) => show_error(command, &error),
    }
}

fn show_error<T: Terminal>(command: &Interface<T>, error: &Error) -> std::io::Result<()> {
    command.write_fmt(format_args!(
        "{}\n",
        Style::new().bold().paint(error.to_string())
    ))
}

fn load(filename: &str) -> Result<String, Error> {
    let file = match File::open(filename) {
        Ok(file) => file,
        Err(error) => {
            let msg = error.to_string();
            match error.kind() {
                ErrorKind::NotFound => return Err(error!(FileNotFound; msg.as_str())),
                _ => return Err(error!(InternalError; msg.as_str())),
            }
        }
    };
    let mut source = String::new();
    if let Err(error) = BufReader::new(file).read_to_string(&mut source) {
        return Err(error!(InternalError; error.to_string().as_str()));
    }
    Ok(source)
}
