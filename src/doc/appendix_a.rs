/*!
# Simpletron Machine Language

A word is `opcode * 100 + address`. There is one accumulator.

| Code | Mnemonic   | Effect                                                  |
|------|------------|---------------------------------------------------------|
| 10   | READ       | read an integer into memory                             |
| 11   | WRITE      | write memory as a decimal number                        |
| 12   | NEWLINE    | write a line break                                      |
| 13   | WRITES     | write the string whose length is at the address         |
| 20   | LOAD       | accumulator = memory                                    |
| 21   | STORE      | memory = accumulator                                    |
| 30   | ADD        | accumulator += memory                                   |
| 31   | SUB        | accumulator -= memory                                   |
| 32   | DIV        | accumulator /= memory                                   |
| 33   | MUL        | accumulator *= memory                                   |
| 34   | MOD        | accumulator %= memory                                   |
| 40   | BRANCH     | jump to address                                         |
| 41   | BRANCHNEG  | jump to address if accumulator is negative              |
| 42   | BRANCHZERO | jump to address if accumulator is zero                  |
| 43   | HALT       | stop                                                    |

A string stores its length at its address and one character code per
cell at the addresses below it.

An `.sml` file holds one word per line written as `%+05d`, for example
`+2099`, in address order. Files with fewer than 100 words leave the
remaining cells zero.

# Errors

Compile errors name the line and the columns of the offending text.

```text
SYNTAX ERROR IN 20 (7..8); EXPECTED EXPRESSION
```

Runtime errors name the address of the failing instruction.

```text
DIVISION BY ZERO AT 06
```

| Error                        | Raised when                                        |
|------------------------------|----------------------------------------------------|
| NEXT WITHOUT FOR             | `next` with no open `for`                          |
| SYNTAX ERROR                 | the line does not parse                            |
| OVERFLOW                     | a literal or result does not fit 32 bits           |
| OUT OF MEMORY                | instructions and data meet                         |
| UNDEFINED LINE               | `goto` or `if` names a missing line                |
| SUBSCRIPT OUT OF RANGE       | an array subscript is outside the array            |
| MODULO BY ZERO               | `%` by zero                                        |
| DIVISION BY ZERO             | `/` by zero                                        |
| INVALID VARIABLE             | a name other than a single letter                  |
| STRING TOO LONG              | a string literal over 63 characters                |
| NON-CONSTANT SUBSCRIPT       | an array subscript that is not a literal           |
| SYMBOL TABLE FULL            | more than 100 lines, variables and constants       |
| TOO MANY FORWARD REFERENCES  | more than 100 jumps to later lines                 |
| FOR NESTED TOO DEEP          | an eleventh nested `for`                           |
| NEXT VARIABLE MISMATCH       | `next` names the wrong variable                    |
| INVALID PROGRAM COUNTER      | execution runs past address 99                     |
| INVALID OPERAND              | a string would extend below address 0              |
| ILLEGAL INSTRUCTION          | a negative word or unknown operation               |
| EXECUTION CYCLES EXCEEDED    | the instruction limit is reached                   |
| INVALID INPUT                | input is not an integer                            |
| BREAK                        | CTRL-C                                             |
| FILE NOT FOUND               | the file does not exist                            |
| I/O ERROR                    | the file cannot be read or written                 |
| BAD FILE FORMAT              | an `.sml` file holds something other than words    |

*/
