/*!
# Values

Kotlin has various types including strings, integers, floats, booleans,
etc. Here are a few basic examples.

```text
fun main() {
    // Strings, which can be added together with `+`.
    println("kot" + "lin")

    // Integers and floats.
    println(1 + 1)
    println(7.0 / 3.0)

    // Booleans, with boolean operators as you’d expect.
    println(true && false)
    println(true || false)
    println(!true)
}
```

Running the program prints one line per `println`.

```text
$ values
kotlin
2
2.3333333333333335
false
true
false
```

Strings added to anything else take on the text of the right hand side, so
`"answer " + 42` is `answer 42`. Adding a string to the right of a number is
a `TYPE MISMATCH`.

Integers are 32-bit. Dividing two integers truncates toward zero and dividing
by an integer zero is a `DIVISION BY ZERO` error. Arithmetic that would not
fit in 32 bits wraps around, so `2147483647 + 1` is `-2147483648`.

Mixing an integer with a float gives a float. Floats always print with at
least one digit after the decimal point, so `2.0 * 3` prints `6.0`. Very large
and very small floats switch to scientific notation: `1.0E7`, `2.5E-5`.
Dividing a float by zero gives `Infinity` or `NaN`.

The boolean operators `&&`, `||` and `!` only accept booleans.

Errors stop the program. The error is printed to the standard error stream
along with the number of the line that caused it, counting `println`
statements from 1.

```text
?DIVISION BY ZERO IN 2
```

*/
