/*!
# Chapter 1: The Tape Language

## Characters

Source text is made of letters (`a`-`z`, `A`-`Z`), digits (`0`-`9`),
whitespace (space, tab, newline), and the punctuation `_ : . ! @ [ ]
( ) { } , " \`. The operator symbols `+ - * / % > < = & | ~` are
recognized but have no meaning outside strings yet. Any character may
appear inside a string; anywhere else, an unrecognized character is an
error.

## Cells

A tape is an ordered sequence of cells, written one after another and
separated by whitespace.

* **Value identifiers** are a letter followed by letters, digits, and
  underscores: `abc`, `a0_z`.
* **Call identifiers** end in `!`: `add!`. They mark call sites; every
  other cell is data.
* **Address identifiers** begin with `@`: `@acc`.
* **Numbers** are digit runs with an optional decimal part: `3`,
  `33.44`. A period must be followed by at least one digit.
* **Strings** are double-quoted; `\"` puts a quote inside a string and
  is the only escape.
* **Blank** is `_`, a cell holding nothing.
* **Commas** may appear between cells. They are remembered but do not
  affect the cells.

## Labels

An identifier ending in `:` labels the next cell appended to the
current tape. Label names are unique on a tape; two labels in a row,
or a label at the very end of the input, are errors.

<pre><code>&nbsp;> a: b
&nbsp;  [ a: b ]
</code></pre>

## Tapes

`[` opens a nested tape in the next cell and `]` closes it. `{` and
`}` do the same for an inline tape. The distinction is remembered but
both kinds hold cells the same way. Tapes nest arbitrarily.

## Parameters

`(` ... `)` immediately before `[` declares the parameters of the tape
it opens. A plain name declares a positional parameter. A label-style
name declares a parameter with a default, and the default value
(a number, string, address, or identifier) must follow immediately.
Parameter names are unique within one list, and the list must be
followed by a tape.

<pre><code>&nbsp;> (meow abcd: "cheese")[ meow abcd ]
&nbsp;  [ ( meow abcd: "cheese" )[ meow abcd ] ]
</code></pre>

## References

After parsing, every identifier mentioned on a tape is classified:

* **Local**: the tape has a label by that name; the reference carries
  the labeled cell's index. A label beats a same-named parameter.
* **Param**: the name is in the tape's parameter list; the reference
  carries the parameter's position.
* **Upvalue**: the tape itself does not bind the name. The name
  drifts outward through enclosing tapes until one of them binds it;
  a name unbound even at the outermost tape stays an upvalue and is
  left for the host to supply.

Classification never fails: an unbound name is not an error, it is a
deferred global.

*/
