use crate::lang::ast::{Expression, Statement};
use crate::mach::{Event, Listing, Runtime};


fn run(runtime: &mut Runtime) -> String {
    run_cycles(runtime, 5000)
}

fn run_cycles(runtime: &mut Runtime, cycles: usize) -> String {
    let mut s = String::new();
    let mut prev_running = false;
    loop {
        let event = runtime.execute(cycles);
        match &event {
            Event::Stopped => {
                break;
            }
            Event::Errors(errors) => {
                for error in errors.iter() {
                    s.push_str(&format!("?{}\n", error));
                }
            }
            Event::Running => {
                if prev_running {
                    s.push_str(&format!("\n{} Execution cycles exceeded.\n", cycles));
                    break;
                }
            }
            Event::Print(ps) => {
                s.push_str(ps);
            }
        }
        prev_running = matches!(event, Event::Running);
    }
    s
}

fn print(expr: Expression) -> String {
    let mut listing = Listing::default();
    listing.push(None, Statement::Print(expr)).unwrap();
    run(&mut Runtime::new(listing))
}
