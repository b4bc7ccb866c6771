use std::fmt::{Debug, Error, Formatter};

use crate::Array;

/// Entry in the formatted representation of an array's data.
enum Entry<T: Debug> {
    Value(T),

    /// "..." used to elide long dimensions.
    Ellipsis,
}

impl<T: Debug> Debug for Entry<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), Error> {
        match self {
            Entry::Value(value) => write!(f, "{:?}", value),
            Entry::Ellipsis => write!(f, "..."),
        }
    }
}

/// Configuration for debug formatting of an array.
struct FormatOptions {
    /// Maximum number of columns to print before eliding.
    max_columns: usize,

    /// Maximum number of rows to print before eliding.
    max_rows: usize,
}

impl Default for FormatOptions {
    fn default() -> Self {
        FormatOptions {
            max_columns: 10,
            max_rows: 10,
        }
    }
}

/// A [`Debug`]-implementing wrapper around an array reference with custom
/// formatting options.
struct FormatArray<'a, T> {
    array: &'a Array<T>,
    opts: FormatOptions,
}

impl<'a, T: Debug> FormatArray<'a, T> {
    fn new(array: &'a Array<T>, opts: FormatOptions) -> Self {
        FormatArray { array, opts }
    }

    /// Format a single row as a list (`[0, 1, 2, ... n]`).
    fn write_row(&self, f: &mut Formatter<'_>, row: &[T]) -> Result<(), Error> {
        let len = row.len();

        let head = row.iter().take(self.opts.max_columns / 2);
        let tail = row
            .iter()
            .skip(self.opts.max_columns / 2)
            .skip(len.saturating_sub(self.opts.max_columns));

        let mut list = f.debug_list();
        list.entries(head.map(Entry::Value));
        if len > self.opts.max_columns {
            list.entry(&Entry::<&T>::Ellipsis);
        }
        list.entries(tail.map(Entry::Value));
        list.finish()
    }
}

impl<T: Debug> Debug for FormatArray<'_, T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), Error> {
        let rows = self.array.rows();
        let shown = rows.min(self.opts.max_rows);

        write!(f, "[")?;
        for (i, row) in self.array.iter_rows().take(shown).enumerate() {
            self.write_row(f, row)?;
            if i < shown - 1 {
                write!(f, ",\n ")?;
            } else if rows > shown {
                write!(f, ",\n ...")?;
            }
        }
        write!(f, "], shape={}", self.array.shape())
    }
}

impl<T: Debug> Debug for Array<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), Error> {
        write!(f, "{:?}", FormatArray::new(self, FormatOptions::default()))
    }
}
