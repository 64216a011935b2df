//! Content hashing for nodes.
//!
//! 64-bit FNV-1a over the type tag, the sorted-key JSON form of the props and
//! the ordered child hashes.

use std::io;

use super::props::Props;

const FNV_OFFSET_BASIS: u64 = 0xcbf2_9ce4_8422_2325;
const FNV_PRIME: u64 = 0x0000_0100_0000_01b3;

/// Streaming FNV-1a hasher.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Fnv1a(u64);

impl Fnv1a {
    pub(crate) const fn new() -> Self {
        Self(FNV_OFFSET_BASIS)
    }

    #[inline]
    pub(crate) fn update(&mut self, bytes: &[u8]) {
        for byte in bytes {
            self.0 ^= *byte as u64;
            self.0 = self.0.wrapping_mul(FNV_PRIME);
        }
    }

    pub(crate) const fn finish(self) -> u64 {
        self.0
    }
}

impl io::Write for Fnv1a {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.update(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Hash one node from its parts.
pub(crate) fn node_hash(tag: &str, props: &Props, child_hashes: impl Iterator<Item = u64>) -> u64 {
    let mut hasher = Fnv1a::new();
    hasher.update(tag.as_bytes());
    hasher.update(&[0]);
    if let Err(err) = serde_json::to_writer(&mut hasher, props) {
        tracing::warn!(%err, tag, "failed to serialize props for hashing");
    }
    hasher.update(&[0]);
    for child in child_hashes {
        hasher.update(&child.to_le_bytes());
    }
    hasher.finish()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fnv(bytes: &[u8]) -> u64 {
        let mut h = Fnv1a::new();
        h.update(bytes);
        h.finish()
    }

    #[test]
    fn test_fnv1a_reference_vectors() {
        assert_eq!(fnv(b""), 0xcbf29ce484222325);
        assert_eq!(fnv(b"a"), 0xaf63dc4c8601ec8c);
        assert_eq!(fnv(b"foobar"), 0x85944171f73967e8);
    }

    #[test]
    fn test_children_order_matters() {
        let props = Props::new();
        let ab = node_hash("box", &props, [1, 2].into_iter());
        let ba = node_hash("box", &props, [2, 1].into_iter());
        assert_ne!(ab, ba);
    }

    #[test]
    fn test_tag_matters() {
        let props = Props::new();
        assert_ne!(
            node_hash("box", &props, std::iter::empty()),
            node_hash("text", &props, std::iter::empty())
        );
    }
}
