use std::io::{self, IsTerminal, Write};
use std::thread;
use std::time::Duration;

use rand::seq::SliceRandom;
use rand::Rng;
use yansi::Paint;

const GLYPHS: &[u8] = b"abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";

/// `n` caractères tirés au hasard, en majuscules, séparés par des espaces.
fn noise(rng: &mut impl Rng, n: usize) -> String {
    GLYPHS
        .choose_multiple(rng, n)
        .map(|&c| char::from(c).to_ascii_uppercase().to_string())
        .collect::<Vec<_>>()
        .join(" ")
}

fn spaced(name: &str) -> String {
    name.to_uppercase()
        .chars()
        .map(String::from)
        .collect::<Vec<_>>()
        .join(" ")
}

pub fn show(name: &str, version: &str, author: &str) {
    let mut rng = rand::thread_rng();
    let width = name.len() + 4;
    let title = format!(
        "{} {} {}",
        noise(&mut rng, 2),
        spaced(name).bright_red(),
        noise(&mut rng, 2)
    );
    let lines = [noise(&mut rng, width), title, noise(&mut rng, width)];
    let animate = io::stdout().is_terminal();

    println!();
    for line in &lines {
        if animate {
            for _ in 0..rng.gen_range(1..=4) {
                print!("\t{}\r", noise(&mut rng, width));
                let _ = io::stdout().flush();
                thread::sleep(Duration::from_millis(100));
            }
        }
        println!("\t{line}");
    }
    println!("\n\tAuthor: {author}");
    println!("\tVersion: {version}\n");
    println!(">> Rust REPL <<");
}
