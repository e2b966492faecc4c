use std::io::{self, Write};

/// A read-only source of named entries, the backing store of a session.
pub trait Filesystem {
    /// Short name of the image, shown by `pwd`.
    fn image_name(&self) -> &str;
    /// Raw names of every entry, in no particular order.
    fn entry_names(&self) -> Vec<String>;
    /// Stream the bytes of the entry called `name` into `out`.
    fn copy_entry(&mut self, name: &str, out: &mut dyn Write) -> io::Result<u64>;
}
