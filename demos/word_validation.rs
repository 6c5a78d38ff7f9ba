//! Word validation with `EitherT` over `IO`.
//!
//! Reads a word that must start with `s` and a number, then prints both. The
//! first failed check is printed instead and the remaining prompts are
//! skipped.
//!
//! ```text
//! cargo run --example word_validation
//! ```

use pmonad::effect::{ConsoleError, Either, EitherT, IO};
use pmonad::typeclass::{Functor, Monad};

type Console<A> = EitherT<String, IO<Either<String, A>>>;

fn validate_word(word: String) -> Either<String, String> {
    if word.starts_with('s') {
        Either::Right(word)
    } else {
        Either::Left(String::from("Word does not start with 's'"))
    }
}

fn validate_number(number: String) -> Either<String, String> {
    if !number.is_empty() && number.chars().all(|character| character.is_ascii_digit()) {
        Either::Right(number)
    } else {
        Either::Left(String::from("Not a number"))
    }
}

fn console<A>(action: IO<Either<ConsoleError, A>>) -> Console<A> {
    EitherT::new(action.fmap(|outcome| outcome.map_left(|error| error.to_string())))
}

fn prompt(message: &str, validate: fn(String) -> Either<String, String>) -> Console<String> {
    EitherT::new(
        IO::read_line(message)
            .fmap(|line| line.map_left(|error| error.to_string()).flat_map(validate)),
    )
}

fn main() {
    let outcome = console(IO::print_line("Word validation with EitherT"))
        .flat_map(|()| prompt("Write a word that starts with s: ", validate_word))
        .flat_map(|word| {
            prompt("Write a number: ", validate_number)
                .flat_map(|number| EitherT::lift(IO::pure(format!("{word} {number}"))))
        })
        .run()
        .run_unsafe();

    let message = outcome.either(|error| error, |combined| combined);
    if let Either::Left(error) = IO::print_line(&message).run_unsafe() {
        eprintln!("{error}");
    }
}
