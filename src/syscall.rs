/*!
 Linux EABI system calls.  The call number goes in R7, the arguments in
 R0 to R2, and `SVC #0` traps into the kernel.
 */
use crate::arch::Register;
use crate::asm::Asm;

pub const SYS_EXIT: i32 = 1;
pub const SYS_WRITE: i32 = 4;
pub const STDOUT: i32 = 1;
pub const EXIT_STATUS: i32 = 1;

/// Writes `size` bytes starting at the stack pointer to stdout.
pub fn write(asm: &mut Asm, size: i32) {
    asm.mov(Register::R7, SYS_WRITE)
        .mov(Register::R0, STDOUT)
        .mov(Register::R1, Register::Sp)
        .mov(Register::R2, size)
        .svc();
}

pub fn exit(asm: &mut Asm) {
    asm.mov(Register::R7, SYS_EXIT)
        .mov(Register::R0, EXIT_STATUS)
        .svc();
}
