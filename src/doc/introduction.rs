/*!
# Introductory Tutorial for Simple

Start the executable without arguments to get an interactive session.
Type `quit` or CTRL-D to leave.
<pre><code>&nbsp;  Simple
&nbsp;  Type help for commands.
&nbsp;> █
</code></pre>

Every statement in Simple lives on a numbered line. Type a line number
followed by a statement and it is stored in the program. Typing the same
line number again replaces it. Typing a line number alone deletes it.

<pre><code>&nbsp;> 10 print "Hello World"
&nbsp;> 20 end
&nbsp;> run
&nbsp;  Hello World
</code></pre>

Lines are checked for syntax as soon as you type them. A line with a
mistake is not stored.

<pre><code>&nbsp;> 10 paint "Hello World"
&nbsp;  <b>SYNTAX ERROR IN 10 (0..5); EXPECTED STATEMENT; MISSING LET?</b>
</code></pre>

`list` shows the program and `new` erases it. `listing` compiles the
program without running it and shows the symbol table followed by the
machine code. Each machine instruction is a signed four digit word; the
first two digits are the operation and the last two are a memory address.

<pre><code>&nbsp;> 10 let x = 5
&nbsp;> 20 end
&nbsp;> listing
&nbsp;  SYMBOLS:
&nbsp;    LINE      10 -> loc 00
&nbsp;    VAR      'x' -> loc 99
&nbsp;    CONST      5 -> loc 98
&nbsp;    LINE      20 -> loc 02
&nbsp;  LISTING:
&nbsp;    00: +2098  LOAD       98    ; 10
&nbsp;    01: +2199  STORE      99
&nbsp;    02: +4300  HALT       00    ; 20
&nbsp;    --
&nbsp;    98: +0005  5
&nbsp;    99: +0000  x
</code></pre>

Here is a program which asks for a number and counts down from it.
`input` prints a question mark and waits for an integer.

<pre><code>&nbsp;> 10 input n
&nbsp;> 20 for i = n to 1 step -1
&nbsp;> 30 print i
&nbsp;> 40 next i
&nbsp;> 50 end
&nbsp;> run
&nbsp;  ? 3
&nbsp;  3
&nbsp;  2
&nbsp;  1
</code></pre>

Programs that never reach `end` are stopped after 100,000 instructions.
CTRL-C stops them sooner.

<pre><code>&nbsp;> 10 goto 10
&nbsp;> run
&nbsp;  <b>EXECUTION CYCLES EXCEEDED AT 00; 100000 CYCLES</b>
</code></pre>

Programs can also be kept in files. Running `simple count.s` compiles
and runs a file. `simple -c count.s` prints the listing and writes the
machine code to `count.sml` which `simple -x count.sml` will run without
the compiler. Add `--dump` to see the registers and all 100 memory cells
after the program stops.

*/
