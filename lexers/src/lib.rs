mod scanner;
mod chars;
mod word_tokenizer;

pub use scanner::Scanner;
pub use chars::WHITESPACE;
pub use word_tokenizer::WordTokenizer;
