mod assembler;
mod decoder;
