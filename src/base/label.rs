//! Leaf labels
//!
//! Labels are short uppercase identifiers handed out to leaves in
//! left-to-right order: `A` through `Z`, then `AA`, `AB`, ... `ZZ`, `AAA`.

use smol_str::SmolStr;

/// A leaf label such as `A` or `AB`
pub type Label = SmolStr;

const ALPHABET: u8 = 26;

/// Label for the leaf at zero-based position `index`.
///
/// Bijective base-26: `0 -> A`, `25 -> Z`, `26 -> AA`, `701 -> ZZ`, `702 -> AAA`.
pub fn label_for_index(index: usize) -> Label {
    let base = ALPHABET as usize;
    let mut letters = Vec::with_capacity(4);
    let mut n = index;
    loop {
        letters.push(char::from(b'A' + (n % base) as u8));
        if n < base {
            break;
        }
        n = n / base - 1;
    }
    letters.iter().rev().collect::<String>().into()
}
