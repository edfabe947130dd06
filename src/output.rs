use std::{
    fmt::{self, Display, Formatter},
    io::{self, Write},
};

use itertools::Itertools;

use crate::types::SupportCount;

/// An itemset resolved to its item tokens, with its support count.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct ItemsetSupport<I> {
    pub items: Vec<I>,
    pub support: SupportCount,
}

/// `a,b,c: 3`
impl<I: Display> Display for ItemsetSupport<I> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.items.iter().join(","), self.support)
    }
}

/// Write itemsets as a count line followed by one `items: support` line each.
pub fn write_patterns<W: Write, I: Display>(
    writer: &mut W,
    patterns: &[ItemsetSupport<I>],
) -> io::Result<()> {
    writeln!(writer, "{}", patterns.len())?;
    for pattern in patterns {
        writeln!(writer, "{}", pattern)?;
    }
    Ok(())
}
