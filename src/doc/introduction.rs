/*!
# Introductory Tutorial for Tape

Begin by opening a terminal and running the executable. If you get the
following, you have achieved success and are ready for this tutorial.
Type CTRL-D to exit.
<pre><code>&nbsp;  TAPE
&nbsp;  READY.
&nbsp;> █
</code></pre>

Tape is interactive: every line you enter is run through the whole
front end (lexing, parsing, reference resolution) and the finished
tree is printed back in a canonical form. For this tutorial, I'll mark
lines that you type with a "`>`". Go ahead and try your first program.
Type in the marked line followed by ENTER.

<pre><code>&nbsp;> one 2 "three"
&nbsp;  [ one 2 "three" ]
</code></pre>

Everything you enter lives on a tape, printed between `[` and `]`.
A tape is an ordered sequence of cells. The three cells above are a
value identifier, a number, and a string. Numbers may have a decimal
part, but a trailing period is an error, and the parser will tell you
so, in bold.

<pre><code>&nbsp;> 33.44
&nbsp;  [ 33.44 ]
&nbsp;> 33.
&nbsp;  <b>INVALID DECIMAL NUMBER IN (3..4); EXPECTED DIGIT AFTER PERIOD</b>
</code></pre>

A blank cell is written `_`, and commas may decorate the sequence
wherever a separation reads better. They change nothing about the
cells themselves.

<pre><code>&nbsp;> a _ , b
&nbsp;  [ a _ , b ]
</code></pre>

Identifiers grow markers to change their meaning. A trailing `!` makes
a call, a leading `@` makes an address, and a trailing `:` makes a
label naming the next cell. Tapes nest: brackets open a new tape in
the current cell, and `{` `}` opens an inline tape.

<pre><code>&nbsp;> start: add! @acc 1
&nbsp;  [ start: add! @acc 1 ]
&nbsp;> outer [ inner ]
&nbsp;  [ outer [ inner ] ]
</code></pre>

A parenthesized list right before a tape declares its parameters. A
label-style name inside the list must be followed by its default
value.

<pre><code>&nbsp;> (meow abcd: "cheese")[ meow ]
&nbsp;  [ ( meow abcd: "cheese" )[ meow ] ]
</code></pre>

Whole files work the same way through `.load`.

<pre><code>&nbsp;> .load hello.tape
&nbsp;  [ greet: [ "hello" ] ]
</code></pre>

That's the whole surface. Chapter 1 covers the language rules one at a
time, including how names on a tape resolve to labels, parameters, or
enclosing scopes.

*/
