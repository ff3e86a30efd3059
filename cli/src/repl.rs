//! The calculator loop.
//!
//! Reads whitespace-separated tokens: a command followed by two integer
//! operands. `quit`, end of input, an unrecognized command, or an operand
//! that fails to parse all end the loop quietly. Each executed command
//! prints one line: `<cmd> <op1> <op2> => <result>`.

use std::io::{self, BufRead, Write};

use bignum::BigInt;

/// Calculator commands. `add`/`sub`/`mult`/`div` print the mutated first
/// operand; `eq`/`gt` print `true`/`false`.
enum Command {
    Add,
    Sub,
    Mult,
    Div,
    Eq,
    Gt,
}

impl Command {
    fn from_token(token: &str) -> Option<Self> {
        match token {
            "add" => Some(Command::Add),
            "sub" => Some(Command::Sub),
            "mult" => Some(Command::Mult),
            "div" => Some(Command::Div),
            "eq" => Some(Command::Eq),
            "gt" => Some(Command::Gt),
            _ => None,
        }
    }
}

/// Whitespace-delimited token reader over any buffered input.
struct Tokens<R> {
    input: R,
    // Tokens of the current line, last token first.
    pending: Vec<String>,
}

impl<R: BufRead> Tokens<R> {
    fn new(input: R) -> Self {
        Self {
            input,
            pending: Vec::new(),
        }
    }

    /// Next token, or `None` at end of input.
    fn next(&mut self) -> io::Result<Option<String>> {
        loop {
            if let Some(token) = self.pending.pop() {
                return Ok(Some(token));
            }
            let mut line = String::new();
            if self.input.read_line(&mut line)? == 0 {
                return Ok(None);
            }
            self.pending = line.split_whitespace().rev().map(str::to_string).collect();
        }
    }
}

/// Run the calculator loop until `quit`, end of input, or bad input.
///
/// Only I/O failures surface as errors; every protocol-level stop condition
/// is a normal return.
pub fn run<R: BufRead, W: Write>(input: R, output: &mut W) -> io::Result<()> {
    let mut tokens = Tokens::new(input);
    loop {
        let Some(token) = tokens.next()? else { break };
        if token == "quit" {
            break;
        }
        let Some(command) = Command::from_token(&token) else {
            break;
        };
        let Some(first) = tokens.next()? else { break };
        let Some(second) = tokens.next()? else { break };
        let Ok(mut op1) = BigInt::parse(&first) else {
            break;
        };
        let Ok(op2) = BigInt::parse(&second) else {
            break;
        };
        // Operands echo in canonical form, which is exactly the accepted
        // input spelling.
        write!(output, "{token} {op1} {op2} => ")?;
        match command {
            Command::Add => {
                op1.add(&op2);
                writeln!(output, "{op1}")?;
            }
            Command::Sub => {
                op1.sub(&op2);
                writeln!(output, "{op1}")?;
            }
            Command::Mult => {
                op1.mul(&op2);
                writeln!(output, "{op1}")?;
            }
            Command::Div => {
                op1.div(&op2);
                writeln!(output, "{op1}")?;
            }
            Command::Eq => {
                writeln!(output, "{}", op1 == op2)?;
            }
            Command::Gt => {
                writeln!(output, "{}", op1 > op2)?;
            }
        }
    }
    Ok(())
}
