#![allow(dead_code)]

use simple::mach::{compile, Event, Runtime};

pub fn exec(runtime: &mut Runtime) -> String {
    exec_n(runtime, 5000)
}

pub fn exec_n(runtime: &mut Runtime, cycles: usize) -> String {
    let mut s = String::new();
    loop {
        match runtime.execute(cycles) {
            Event::Stopped => break,
            Event::Running => {}
            Event::Print(ps) | Event::Trace(ps) => s.push_str(&ps),
            Event::Error(error) => s.push_str(&format!("{}\n", error)),
            Event::Input(ps) => {
                s.push_str(&ps);
                break;
            }
        }
    }
    s
}

pub fn run(source: &str) -> String {
    run_with_input(source, &[])
}

pub fn run_with_input(source: &str, input: &[&str]) -> String {
    let image = match compile(source) {
        Ok(image) => image,
        Err(error) => return format!("{}\n", error),
    };
    let mut runtime = Runtime::new();
    runtime.load(&image);
    for line in input {
        runtime.enter(line);
    }
    exec(&mut runtime)
}
