/*!
# Statements and Expressions

A Simple program is a sequence of lines. Each line starts with a line
number from 0 to 65535 followed by exactly one statement. Lines are
compiled in the order they appear in the file, not sorted by number.
If a line number appears twice, `goto` and `if` jump to the first one.

Keywords and variable names are case insensitive. Variables are the
single letters `a` through `z` and hold signed integers. Every variable
starts at zero.

## Statements

```text
10 rem anything until the end of the line
20 input a, b, c(3)
30 print "sum ", a + b
40 let c(4) = a * b
50 goto 70
60 if a >= b goto 90
70 for i = 1 to 10 step 2
80 next i
90 end
```

`print` writes each item with no separator and then a line break.
An item is a string literal of at most 63 characters or an expression.
`print` alone writes an empty line.

`if` compares two expressions with one of `==` (or `=`), `!=`, `<`, `>`,
`<=` or `>=` and jumps to a line number when the comparison is true.

`for` assigns the start value and runs the loop body at least once.
When `next` is reached the step is added and the loop repeats while the
variable has not passed the end value. The step must be an integer
literal and defaults to 1. Loops nest at most ten deep and every `next`
must name the variable of the innermost open `for`.

## Expressions

From lowest to highest precedence:

| Operators   | Meaning                                |
|-------------|----------------------------------------|
| `+` `-`     | addition, subtraction                  |
| `*` `/` `%` | multiplication, division, remainder    |
| `^`         | power, right associative               |
| `-` `+`     | unary negation and plus                |

Division truncates toward zero and the remainder takes the sign of the
left operand. A negative power is treated as zero so `2 ^ -1` is 1.
Decimal literals are truncated: `7.9` is 7.

## Arrays

An array element is a letter followed by an integer literal in
parentheses, `a(3)`. The array is created the first time it is used and
holds ten elements or enough for that first subscript, whichever is
larger. The subscript must be a literal because the machine has no
indirect addressing; `a(i)` is a compile error.

## Memory

Everything shares 100 memory cells. Instructions fill from address 0 up
and variables, constants, strings, arrays and the temporaries used by
expressions fill from address 99 down. A program that needs more is
rejected with `OUT OF MEMORY`.

*/
