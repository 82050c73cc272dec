mod scanner;
mod prefix_tokenizer;

pub use scanner::Scanner;
pub use prefix_tokenizer::{LexError, PrefixToken, PrefixTokenizer, TokenSource};

#[cfg(test)]
mod scanner_test;
#[cfg(test)]
mod prefix_tokenizer_test;
