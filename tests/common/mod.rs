use rpn::term::{run, Mode};

pub fn exec(mode: Mode, input: &str) -> String {
    exec_bytes(mode, input.as_bytes())
}

pub fn exec_bytes(mode: Mode, input: &[u8]) -> String {
    let mut output: Vec<u8> = Vec::new();
    run(mode, input, &mut output).unwrap();
    String::from_utf8(output).unwrap()
}

#[allow(dead_code)]
pub fn interactive(input: &str) -> String {
    exec(Mode::Interactive, input)
}

#[allow(dead_code)]
pub fn batch(input: &str) -> String {
    exec(Mode::Batch, input)
}
