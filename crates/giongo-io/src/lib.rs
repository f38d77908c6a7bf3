pub mod deck;
pub mod wordlist;
