use super::Column;

pub struct Error {
    code: u16,
    column: Column,
    message: String,
}

#[doc(hidden)]
#[macro_export]
macro_rules! error {
    ($err:ident) => {
        $crate::lang::Error::new($crate::lang::ErrorCode::$err)
    };
    ($err:ident, ..$col:expr) => {
        $crate::lang::Error::new($crate::lang::ErrorCode::$err).in_column($col)
    };
    ($err:ident; $msg:expr) => {
        $crate::lang::Error::new($crate::lang::ErrorCode::$err).message($msg)
    };
    ($err:ident, ..$col:expr;  $msg:expr) => {
        $crate::lang::Error::new($crate::lang::ErrorCode::$err)
            .in_column($col)
            .message($msg)
    };
}

impl Error {
    pub fn new(code: ErrorCode) -> Error {
        Error {
            code: code as u16,
            column: 0..0,
            message: String::new(),
        }
    }

    pub fn is_lexical(&self) -> bool {
        self.code < 20
    }

    pub fn in_column(&self, column: &Column) -> Error {
        Error {
            code: self.code,
            column: column.clone(),
            message: self.message.clone(),
        }
    }

    pub fn message(&self, message: &str) -> Error {
        debug_assert!(self.message.is_empty());
        Error {
            code: self.code,
            column: self.column.clone(),
            message: message.to_string(),
        }
    }
}

#[derive(Debug, PartialEq, Clone, Copy)]
pub enum ErrorCode {
    UnexpectedCharacter = 10,
    InvalidDecimal = 11,
    UnterminatedString = 12,
    InvalidEscape = 13,
    UnexpectedToken = 20,
    InvalidParameter = 21,
    MissingDefaultValue = 22,
    ParamsWithoutTape = 23,
    ConsecutiveLabels = 24,
    LabelWithoutBlock = 25,
    UnbalancedTape = 26,
    DuplicateParameter = 30,
    DuplicateLabel = 31,
    InternalError = 51,
    FileNotFound = 53,
}

impl PartialEq<ErrorCode> for Error {
    fn eq(&self, other: &ErrorCode) -> bool {
        self.code == *other as u16
    }
}

impl std::fmt::Debug for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Error {{ {} }}", self.to_string())
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let code_str = match self.code {
            10 => "UNEXPECTED CHARACTER",
            11 => "INVALID DECIMAL NUMBER",
            12 => "UNTERMINATED STRING",
            13 => "INVALID ESCAPE",
            20 => "UNEXPECTED TOKEN",
            21 => "INVALID PARAMETER",
            22 => "MISSING DEFAULT VALUE",
            23 => "PARAMETERS WITHOUT TAPE",
            24 => "CONSECUTIVE LABELS",
            25 => "LABEL WITHOUT BLOCK",
            26 => "UNBALANCED TAPE",
            30 => "DUPLICATE PARAMETER",
            31 => "DUPLICATE LABEL",
            51 => "INTERNAL ERROR",
            53 => "FILE NOT FOUND",
            _ => "",
        };
        let mut suffix = String::new();
        if (0..0) != self.column {
            suffix.push_str(&format!(" ({}..{})", self.column.start, self.column.end));
        }
        if !self.message.is_empty() {
            suffix.push_str(&format!("; {}", self.message));
        }
        if code_str.is_empty() {
            if suffix.is_empty() {
                write!(f, "PARSE ERROR {}", self.code)
            } else {
                write!(f, "PARSE ERROR {} IN{}", self.code, suffix)
            }
        } else {
            if suffix.is_empty() {
                write!(f, "{}", code_str)
            } else {
                write!(f, "{} IN{}", code_str, suffix)
            }
        }
    }
}
