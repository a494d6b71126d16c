/// Whether a mode handled the invocation or the next one should look at it.
#[derive(Debug, PartialEq, Eq)]
pub enum CliModeResult {
    Finish,
    NothingToDo,
}
