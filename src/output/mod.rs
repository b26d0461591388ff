// Output formatting: terminal rendering of the keyword report.

pub mod terminal;
