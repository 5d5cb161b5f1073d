//! Assembly: Endgame, a hangman-style word game where every wrong guess
//! costs a programming language.

pub mod catalog;
pub mod endgame;
