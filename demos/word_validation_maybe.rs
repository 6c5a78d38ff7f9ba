//! Word validation with `MaybeT` over `IO`.
//!
//! Same flow as the `EitherT` demo, but a failed check only stops the chain;
//! no reason is reported.
//!
//! ```text
//! cargo run --example word_validation_maybe
//! ```

use pmonad::effect::{IO, Maybe, MaybeT};
use pmonad::typeclass::Functor;

fn checked(prompt: &str, accept: fn(&str) -> bool) -> MaybeT<IO<Maybe<String>>> {
    MaybeT::new(
        IO::read_line(prompt).fmap(|line| Maybe::from(line.right().filter(|text| accept(text)))),
    )
}

fn main() {
    let printed = MaybeT::lift(IO::print_line("Word validation with MaybeT").fmap(|_| ()))
        .then(checked("Write a word that starts with s: ", |word| word.starts_with('s')))
        .flat_map(|word| {
            checked("Write a number: ", |number| {
                !number.is_empty() && number.chars().all(|character| character.is_ascii_digit())
            })
            .flat_map(|number| MaybeT::lift(IO::print_line(format!("{word} {number}"))))
        })
        .run()
        .run_unsafe();

    if printed.is_nothing() {
        eprintln!("validation failed");
    }
}
