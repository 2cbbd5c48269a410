/*!
 # asm
 ## About
 This module models 32-bit ARM assembly source text: operands, single
 instructions, and the `Asm` stream that collects finished lines.

 ## Example
 ```
 use armgen::arch::Register::*;
 use armgen::asm::{mem, Asm};

 let mut asm = Asm::initial();
 asm.mov(R0, 5)
     .strb(R0, mem(Sp, 4).with_write_back())
     .svc();
 assert_eq!(
     asm.text(),
     ".section .text\n.global _start\n_start:\nMOV R0, #5\nSTRB R0, [SP, #4]!\nSVC #0\n"
 );
 ```

 ## Line forms
 1. Instructions: `<OP><COND><S> <operands>` with an optional `; comment`.
 2. Labels: `name:`, the name must not be empty or contain whitespace.
 3. Directives: copied verbatim.
 4. Comments: `# text`.
 */
pub mod instruction;
pub mod operand;
pub mod stream;

pub use instruction::{Instruction, Modifiers};
pub use operand::{
    asr, lsl, lsr, mem, ror, Immediate, Indexing, Memory, Offset, Operand, Operand2, Shift,
    ShiftKind,
};
pub use stream::{Asm, ENTRY_POINT};
