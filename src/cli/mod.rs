mod context;
mod flags;
mod parse;
pub mod prompts;
pub mod quiet;

pub use context::{Context, Done};
pub use flags::CliFlags;
pub use parse::parse;

/// Run the CLI and return the process exit code.
pub fn run(args: Vec<String>) -> i32 {
    let mut ctx = match Context::new(&args) {
        Ok(ctx) => ctx,
        Err(e) => {
            prompts::error(&e);
            prompts::usage_hint();
            return 2;
        }
    };

    match ctx.run() {
        Ok(()) => 0,
        Err(Done(code)) => code,
    }
}
