/*!
# Commands

Command names are not case sensitive. Missing arguments are an error;
extra arguments are ignored.

| Command | Arguments | Effect |
|---|---|---|
| `print` | value | write the value |
| `println` | value | write the value and a line break |
| `exit` | [code] | end the program with the exit code, default 0 |
| `setreg` | reg value | store the value in a register |
| `pushreg` | reg | push the register onto the stack |
| `popreg` | reg | pop the stack into the register |
| `peekreg` | reg | copy the top of the stack into the register |
| `addreg` | reg x y | `reg = x + y` |
| `subreg` | reg x y | `reg = x - y` |
| `mulreg` | reg x y | `reg = x * y` |
| `divreg` | reg x y | `reg = x / y`, rounding toward zero |
| `sqrtreg` | reg x | `reg` = square root of `x`, rounded down |
| `setline` | line value | replace the text of a line |
| `jumpline` | line | continue at that line |
| `inputline` | line | read a line of input into that line |
| `conditional` | x y op line value | replace the line if `x op y` holds |

## `conditional` operators

`eq` compares the text of both values. `numeq`, `less`, `gtr`, `lesseq`
and `gtreq` compare them as integers.

## Example
```text
setreg a 1
conditional a 1 numeq 4 9
println #4
exit
0
```
prints `9`. Line 4 holds data, so `exit` keeps it from running as a command.

*/
