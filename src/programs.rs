/*!
 Complete freestanding programs built on top of `Asm` and the system call
 helpers.  Each returns the populated stream; `Asm::text` gives the source.
 */
use std::convert::TryFrom;

use log::info;

use crate::arch::Register::{R1, R3, Sp};
use crate::arch::Vocabulary;
use crate::asm::{mem, Asm};
use crate::config::ProgramRequest;
use crate::error::AsmError;
use crate::result::Result;
use crate::syscall;

const STACK_ALIGN: usize = 16;
const NEWLINE: i32 = b'\n' as i32;
const ASCII_ZERO: i32 = b'0' as i32;

/// Stack bytes reserved for `len` bytes of text plus the newline.
pub fn stack_size(len: usize) -> usize {
    (len + 1 + STACK_ALIGN - 1) / STACK_ALIGN * STACK_ALIGN
}

/**
 * Prints `text` followed by a newline and exits.
 *
 * The text is copied onto the stack one byte at a time (UTF-8 bytes, so any
 * string works) and written with a single `write` call.
 */
pub fn print_text(text: &str) -> Result<Asm> {
    let mut asm = Asm::initial();
    text_body(&mut asm, text)?;
    Ok(asm)
}

/**
 * Prints `value` as one ASCII digit followed by a newline and exits.
 *
 * Only 0 to 9 give a digit: the value is offset by `'0'` and stored as a
 * single byte, no conversion of longer numbers is attempted.
 */
pub fn print_digit(value: i32) -> Asm {
    let mut asm = Asm::initial();
    digit_body(&mut asm, value);
    asm
}

/// Builds the requested program on a stream using `vocabulary`.
pub fn generate(request: &ProgramRequest, vocabulary: Box<dyn Vocabulary>) -> Result<Asm> {
    let mut asm = Asm::with_vocabulary(vocabulary);
    asm.prologue();
    match request {
        ProgramRequest::Text(text) => text_body(&mut asm, text)?,
        ProgramRequest::Digit(value) => digit_body(&mut asm, *value),
    }
    Ok(asm)
}

fn text_body(asm: &mut Asm, text: &str) -> Result<()> {
    let bytes = text.as_bytes();
    let size = stack_size(bytes.len());
    let size_imm = i32::try_from(size).map_err(|_| AsmError::ProgramTooLarge(bytes.len()))?;

    asm.mov(R3, Sp);
    asm.sub(Sp, Sp, size_imm);
    asm.comment(&format!("Allocated Stack : {}", size));

    for (idx, b) in bytes.iter().enumerate() {
        asm.mov(R1, i32::from(*b));
        asm.strb(R1, mem(Sp, idx as i32));
    }
    asm.mov(R1, NEWLINE);
    asm.strb(R1, mem(Sp, bytes.len() as i32));

    syscall::write(asm, bytes.len() as i32 + 1);
    asm.comment("Deallocated stack");
    asm.add(Sp, Sp, size_imm);
    syscall::exit(asm);

    info!(
        "generated text printer: {} bytes, {} stack, {} lines",
        bytes.len(),
        size,
        asm.len()
    );
    Ok(())
}

fn digit_body(asm: &mut Asm, value: i32) {
    asm.mov(R1, value);
    asm.add(R1, R1, ASCII_ZERO);
    asm.sub(Sp, Sp, 2);
    asm.strb(R1, mem(Sp, 0));
    asm.mov(R1, NEWLINE);
    asm.strb(R1, mem(Sp, 1));
    syscall::write(asm, 2);
    asm.add(Sp, Sp, 2);
    syscall::exit(asm);

    info!("generated digit printer for {}: {} lines", value, asm.len());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stack_size_rounds_up() {
        assert_eq!(stack_size(0), 16);
        assert_eq!(stack_size(14), 16);
        assert_eq!(stack_size(15), 16);
        assert_eq!(stack_size(16), 32);
        assert_eq!(stack_size(31), 32);
        assert_eq!(stack_size(32), 48);
    }

    #[test]
    fn test_print_text() {
        let asm = print_text("Hi").unwrap();
        let expected = "\
.section .text
.global _start
_start:
MOV R3, SP
SUB SP, SP, #16
# Allocated Stack : 16
MOV R1, #72
STRB R1, [SP, #0]
MOV R1, #105
STRB R1, [SP, #1]
MOV R1, #10
STRB R1, [SP, #2]
MOV R7, #4
MOV R0, #1
MOV R1, SP
MOV R2, #3
SVC #0
# Deallocated stack
ADD SP, SP, #16
MOV R7, #1
MOV R0, #1
SVC #0
";
        assert_eq!(asm.text(), expected);
    }

    #[test]
    fn test_print_empty_text() {
        let asm = print_text("").unwrap();
        let lines = asm.lines();
        assert_eq!(lines[3], "MOV R3, SP");
        assert_eq!(lines[4], "SUB SP, SP, #16");
        assert_eq!(lines[6], "MOV R1, #10");
        assert_eq!(lines[7], "STRB R1, [SP, #0]");
        assert!(lines.contains(&"MOV R2, #1".to_string()));
    }

    #[test]
    fn test_print_text_uses_utf8_bytes() {
        let asm = print_text("é").unwrap();
        let lines = asm.lines();
        assert_eq!(lines[6], "MOV R1, #195");
        assert_eq!(lines[8], "MOV R1, #169");
        assert!(lines.contains(&"MOV R2, #3".to_string()));
    }

    #[test]
    fn test_print_long_text_grows_stack() {
        let text = "x".repeat(20);
        let asm = print_text(&text).unwrap();
        assert_eq!(asm.lines()[4], "SUB SP, SP, #32");
        assert!(asm.lines().contains(&"STRB R1, [SP, #20]".to_string()));
        assert!(asm.lines().contains(&"ADD SP, SP, #32".to_string()));
    }

    #[test]
    fn test_print_digit() {
        let asm = print_digit(7);
        let expected = "\
.section .text
.global _start
_start:
MOV R1, #7
ADD R1, R1, #48
SUB SP, SP, #2
STRB R1, [SP, #0]
MOV R1, #10
STRB R1, [SP, #1]
MOV R7, #4
MOV R0, #1
MOV R1, SP
MOV R2, #2
SVC #0
ADD SP, SP, #2
MOV R7, #1
MOV R0, #1
SVC #0
";
        assert_eq!(asm.text(), expected);
    }

    #[test]
    fn test_generate_matches_direct_calls() {
        use crate::arch::StandardVocabulary;

        let text = generate(&ProgramRequest::Text("ok".into()), Box::new(StandardVocabulary));
        assert_eq!(text.unwrap().text(), print_text("ok").unwrap().text());

        let digit = generate(&ProgramRequest::Digit(9), Box::new(StandardVocabulary));
        assert_eq!(digit.unwrap().text(), print_digit(9).text());
    }

    #[test]
    fn test_generate_with_restricted_vocabulary() {
        use crate::arch::{Operation, OperationSubset};

        let vocab = OperationSubset::new(vec![
            Operation::Mov,
            Operation::Add,
            Operation::Sub,
            Operation::Strb,
            Operation::Svc,
        ]);
        let asm = generate(&ProgramRequest::Digit(1), Box::new(vocab)).unwrap();
        assert_eq!(asm.text(), print_digit(1).text());
    }
}
