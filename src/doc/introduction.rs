/*!
# Introduction

A Modify program is a list of lines, numbered from 0. Each line is run in
order. A line may be empty, a label, or a command followed by arguments
separated by single spaces. There is no quoting.

## Values

A value is either an integer or text. Arguments are resolved like this:

| Argument | Value |
|---|---|
| `123` | the integer 123 (there are no negative literals) |
| `a` `b` `c` `d` | the register's integer, in any case |
| `#5` or `#a` | the current text of that line, as an integer when it is all digits |
| `name` | the line number of the label `:name` |
| anything else | empty text |

Wherever an integer is needed and text is given, the text counts as its
length in characters. `setreg a xyz` sets `a` to 3.

## Labels

A line starting with `:` names itself. Labels are collected once when the
program loads. Overwriting a label line later does not move or remove it.
```text
:loop
println a
jumpline loop
```

## Rewriting lines

`setline` copies a value into a line, and `conditional` does so only when
a comparison holds. Since an argument is a single word, whole commands are
copied from other lines with `#`:
```text
setreg a 7
setline 3 #2
println a
println b
```
prints `7` twice, because line 3 becomes `println a` before it runs.

## Errors

Errors stop the program and are reported as `<Kind> on Line <n>: <message>`
where `n` counts from 1. Pressing Ctrl-C stops the program after the
current instruction and is not treated as a failure.

*/
