//! Symbol module - String interning for efficient identifier handling.
//!
//! This module provides the [`Symbol`] type, which is a compact (4-byte) handle
//! to an interned string. Symbols enable O(1) string comparison and reduce memory
//! usage when the same string appears multiple times in the compiler.
//!
//! # Overview
//!
//! The symbol interning system is shared by the resolver and inferencer, providing:
//!
//! - **Memory efficiency**: Each unique string is stored only once
//! - **Fast comparison**: Symbol comparison is O(1) via index comparison
//! - **Thread safety**: Safe to use across multiple threads concurrently
//! - **Stable handles**: Symbols remain valid for the program lifetime
//!
//! # Performance Characteristics
//!
//! | Operation | Complexity | Notes |
//! |-----------|------------|-------|
//! | `Symbol::intern()` (hit) | O(1) | String already interned |
//! | `Symbol::intern()` (miss) | O(1) | New string allocation |
//! | `Symbol` comparison | O(1) | Index comparison only |
//! | `Symbol::as_str()` | O(n) | Linear search by index |
//! | `Symbol::eq_str()` | O(1) | Hash + pointer comparison |
//!
//! # Thread Safety
//!
//! The symbol interner is fully thread-safe (`Sync + Send`). Multiple threads
//! can intern strings concurrently without blocking each other, thanks to
//! DashMap's lock-free design.
//!
//! # Memory Model
//!
//! Interned strings are allocated on the heap with `'static` lifetime.
//! They are never deallocated, which is acceptable because:
//! 1. The compiler runs for a finite duration
//! 2. The total memory usage is bounded by source code size
//! 3. This avoids complex lifetime tracking
//!
//! # Examples
//!
//! Basic usage:
//!
//! ```
//! use corec_util::symbol::Symbol;
//!
//! let s1 = Symbol::intern("hello");
//! let s2 = Symbol::intern("hello");
//! let s3 = Symbol::intern("world");
//!
//! assert_eq!(s1, s2);  // Same symbol for same string
//! assert_ne!(s1, s3);  // Different strings get different symbols
//! ```
//!
//! Using the known `this` symbol:
//!
//! ```
//! use corec_util::symbol::{Symbol, KW_THIS};
//!
//! assert_eq!(KW_THIS.as_str(), "this");
//! assert!(KW_THIS.is_known());  // pre-defined, not dynamically interned
//! ```
//!
//! Thread-safe usage:
//!
//! ```
//! use corec_util::symbol::Symbol;
//! use std::thread;
//!
//! let handles: Vec<_> = (0..4)
//!     .map(|i| {
//!         thread::spawn(move || {
//!             Symbol::intern(&format!("thread_{}", i))
//!         })
//!     })
//!     .collect();
//!
//! let symbols: Vec<_> = handles.into_iter()
//!     .map(|h| h.join().unwrap())
//!     .collect();
//!
//! // All symbols are unique
//! assert_eq!(symbols.len(), 4);
//! ```
//!
//! # Statistics and Profiling
//!
//! The interner tracks hit/miss statistics for performance profiling:
//!
//! ```
//! use corec_util::symbol::Symbol;
//!
//! let _ = Symbol::intern("test");
//! let _ = Symbol::intern("test");  // Hit
//!
//! let stats = Symbol::stats_struct();
//! println!("Hits: {}, Misses: {}", stats.hits, stats.misses);
//! ```

mod interner;

pub use interner::STRING_TABLE;

/// Statistics about the string interner for profiling
///
/// Provides insights into memory usage and efficiency of the interner.
///
/// # Fields
///
/// * `count` - Number of unique interned strings
/// * `capacity` - Hash map capacity (number of buckets)
/// * `collisions` - Number of hash collisions encountered
/// * `hits` - Number of times an already-interned string was requested
/// * `misses` - Number of times a new string was allocated
///
/// # Examples
///
/// ```
/// use corec_util::symbol::{Symbol, InternerStats};
///
/// let stats = Symbol::stats_struct();
/// println!("Interned {} strings", stats.count);
/// println!("Hit rate: {:.2}%", stats.hit_rate() * 100.0);
/// println!("Load factor: {:.2}", stats.load_factor());
/// ```
#[derive(Clone, Copy, Debug, Default)]
pub struct InternerStats {
    /// Number of interned strings
    pub count: usize,
    /// Hash map capacity (number of buckets)
    pub capacity: usize,
    /// Number of hash collisions encountered
    pub collisions: usize,
    /// Number of cache hits (string already interned)
    pub hits: usize,
    /// Number of cache misses (new string allocation)
    pub misses: usize,
}

impl InternerStats {
    /// Create new stats with the given values
    ///
    /// # Examples
    ///
    /// ```
    /// use corec_util::symbol::InternerStats;
    ///
    /// let stats = InternerStats::new(100, 256, 5, 80, 20);
    /// assert_eq!(stats.count, 100);
    /// assert_eq!(stats.hits, 80);
    /// ```
    pub const fn new(
        count: usize,
        capacity: usize,
        collisions: usize,
        hits: usize,
        misses: usize,
    ) -> Self {
        Self {
            count,
            capacity,
            collisions,
            hits,
            misses,
        }
    }

    /// Calculate the load factor (count / capacity)
    ///
    /// Returns 0.0 if capacity is 0.
    ///
    /// A load factor above 0.75 indicates the hash map may need resizing.
    ///
    /// # Examples
    ///
    /// ```
    /// use corec_util::symbol::InternerStats;
    ///
    /// let stats = InternerStats::new(100, 200, 0, 0, 0);
    /// assert_eq!(stats.load_factor(), 0.5);
    /// ```
    pub fn load_factor(&self) -> f64 {
        if self.capacity == 0 {
            0.0
        } else {
            self.count as f64 / self.capacity as f64
        }
    }

    /// Check if the interner is getting full (load factor > 0.75)
    ///
    /// # Examples
    ///
    /// ```
    /// use corec_util::symbol::InternerStats;
    ///
    /// let stats = InternerStats::new(100, 200, 0, 0, 0);
    /// assert!(!stats.is_near_capacity());
    ///
    /// let stats = InternerStats::new(100, 120, 0, 0, 0);
    /// assert!(stats.is_near_capacity());
    /// ```
    pub fn is_near_capacity(&self) -> bool {
        self.load_factor() > 0.75
    }

    /// Calculate the hit rate (hits / (hits + misses))
    ///
    /// Returns 0.0 if no lookups have been performed.
    ///
    /// A high hit rate (>0.9) indicates good interning efficiency.
    ///
    /// # Examples
    ///
    /// ```
    /// use corec_util::symbol::InternerStats;
    ///
    /// let stats = InternerStats::new(100, 200, 0, 90, 10);
    /// assert_eq!(stats.hit_rate(), 0.9);
    /// ```
    pub fn hit_rate(&self) -> f64 {
        let total = self.hits + self.misses;
        if total == 0 {
            0.0
        } else {
            self.hits as f64 / total as f64
        }
    }

    /// Get total number of interning operations
    ///
    /// # Examples
    ///
    /// ```
    /// use corec_util::symbol::InternerStats;
    ///
    /// let stats = InternerStats::new(100, 200, 0, 90, 10);
    /// assert_eq!(stats.total_operations(), 100);
    /// ```
    pub fn total_operations(&self) -> usize {
        self.hits + self.misses
    }

    /// Get memory efficiency ratio (unique strings / total operations)
    ///
    /// Lower values indicate better deduplication.
    ///
    /// # Examples
    ///
    /// ```
    /// use corec_util::symbol::InternerStats;
    ///
    /// let stats = InternerStats::new(10, 100, 0, 90, 10);
    /// assert_eq!(stats.memory_efficiency(), 0.1);  // 10 unique / 100 ops
    /// ```
    pub fn memory_efficiency(&self) -> f64 {
        if self.count == 0 {
            0.0
        } else {
            self.count as f64 / self.total_operations() as f64
        }
    }
}

/// Symbol - An interned string identifier
///
/// A Symbol is a compact (4-byte) handle to a string stored in a global
/// string table. This enables O(1) string comparison and reduces memory
/// usage when the same string appears multiple times.
///
/// # Size
///
/// `Symbol` is exactly 4 bytes (u32), making it very cache-friendly compared
/// to `String` which is 24 bytes plus heap allocation.
///
/// # Thread Safety
///
/// Symbols are safe to share across threads (`Sync + Send`). The underlying
/// string table uses DashMap for lock-free concurrent access.
///
/// # Lifetime
///
/// Interned strings have `'static` lifetime and are never deallocated.
/// This is safe because the string table lives for the program duration.
///
/// # Examples
///
/// ```
/// use corec_util::symbol::Symbol;
///
/// let keyword = Symbol::intern("fn");
/// let name = Symbol::intern("main");
///
/// assert_eq!(keyword.as_str(), "fn");
/// assert_eq!(name.as_str(), "main");
/// assert_eq!(keyword, Symbol::intern("fn"));  // O(1) comparison
/// ```
///
/// # Performance Notes
///
/// - **Creation**: O(1) hash lookup/insert
/// - **Comparison**: O(1) index comparison
/// - **String retrieval**: O(n) linear search (avoid in hot paths)
/// - **Memory**: One allocation per unique string
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Symbol {
    /// Index into the global string table
    pub(crate) index: u32,
}

// ============================================================================
// KNOWN SYMBOLS
// ============================================================================
//
/// Reserved symbol indices for known symbols.
///
/// All symbols with index < this value are pre-defined at process startup.
/// There is no lexer in this crate, so the reserved set is deliberately
/// small: just the identifiers the resolver and inferencer treat specially
/// regardless of what the source program calls anything else.
const RESERVED_SYMBOLS_END: u32 = 1;

/// Known symbol for `this`, the implicit receiver binding inside a method body.
pub const KW_THIS: Symbol = Symbol { index: 0 };

impl Symbol {
    /// The maximum index value for a symbol
    pub const MAX_INDEX: u32 = u32::MAX;

    /// Intern a string, returning its symbol
    ///
    /// This function will:
    /// 1. Hash the string to check for existing entry
    /// 2. If found, return existing symbol (cache hit)
    /// 3. If not found, allocate new slot and return new symbol (cache miss)
    ///
    /// # Thread Safety
    ///
    /// This function is thread-safe. Multiple threads can intern strings
    /// concurrently using DashMap for lock-free access.
    ///
    /// # Performance
    ///
    /// - **Best case** (string already interned): O(1) hash lookup
    /// - **Worst case** (new unique string): O(1) hash insert + allocation
    ///
    /// # Examples
    ///
    /// ```
    /// use corec_util::symbol::Symbol;
    ///
    /// let keyword = Symbol::intern("fn");
    /// let name = Symbol::intern("main");
    ///
    /// // Interning the same string returns the same symbol
    /// assert_eq!(Symbol::intern("fn"), keyword);
    /// ```
    #[inline]
    pub fn intern(string: &str) -> Self {
        STRING_TABLE.intern(string)
    }

    /// Get the string value associated with this symbol
    ///
    /// # Performance
    ///
    /// O(n) where n is the number of interned strings, as we need to
    /// search the DashMap by index. This is a trade-off for better
    /// concurrent write performance.
    ///
    /// For hot paths, consider caching the string reference or using
    /// [`Symbol::eq_str()`] for comparisons.
    ///
    /// # Panics
    ///
    /// Returns empty string if the symbol is invalid (e.g., created manually
    /// with an out-of-bounds index).
    ///
    /// # Examples
    ///
    /// ```
    /// use corec_util::symbol::Symbol;
    ///
    /// let sym = Symbol::intern("hello");
    /// assert_eq!(sym.as_str(), "hello");
    /// ```
    #[inline]
    pub fn as_str(&self) -> &'static str {
        STRING_TABLE.get(*self).unwrap_or("")
    }

    /// Check if the symbol's string is empty
    ///
    /// # Performance
    ///
    /// O(1) - checks if index corresponds to the empty string symbol.
    ///
    /// # Examples
    ///
    /// ```
    /// use corec_util::symbol::Symbol;
    ///
    /// assert!(Symbol::intern("").is_empty());
    /// assert!(!Symbol::intern("hello").is_empty());
    /// ```
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.as_str().is_empty()
    }

    /// Get the length of the symbol's string in bytes
    ///
    /// # Performance
    ///
    /// O(n) where n is the number of interned strings (requires lookup).
    ///
    /// # Examples
    ///
    /// ```
    /// use corec_util::symbol::Symbol;
    ///
    /// assert_eq!(Symbol::intern("hello").len(), 5);
    /// assert_eq!(Symbol::intern("").len(), 0);
    /// assert_eq!(Symbol::intern("你好").len(), 6);  // UTF-8 bytes
    /// ```
    #[inline]
    pub fn len(&self) -> usize {
        self.as_str().len()
    }

    /// Check if the symbol's string starts with a given prefix
    ///
    /// # Arguments
    ///
    /// * `prefix` - The prefix to check for
    ///
    /// # Examples
    ///
    /// ```
    /// use corec_util::symbol::Symbol;
    ///
    /// let sym = Symbol::intern("hello_world");
    /// assert!(sym.starts_with("hello"));
    /// assert!(!sym.starts_with("world"));
    /// ```
    #[inline]
    pub fn starts_with(&self, prefix: &str) -> bool {
        self.as_str().starts_with(prefix)
    }

    /// Check if the symbol's string ends with a given suffix
    ///
    /// # Arguments
    ///
    /// * `suffix` - The suffix to check for
    ///
    /// # Examples
    ///
    /// ```
    /// use corec_util::symbol::Symbol;
    ///
    /// let sym = Symbol::intern("hello_world");
    /// assert!(sym.ends_with("world"));
    /// assert!(!sym.ends_with("hello"));
    /// ```
    #[inline]
    pub fn ends_with(&self, suffix: &str) -> bool {
        self.as_str().ends_with(suffix)
    }

    /// Compare the symbol's string with a `&str` without allocation
    ///
    /// This is more efficient than `symbol.as_str() == other` when you
    /// only need equality comparison, as it can short-circuit early.
    ///
    /// # Arguments
    ///
    /// * `other` - The string to compare against
    ///
    /// # Examples
    ///
    /// ```
    /// use corec_util::symbol::Symbol;
    ///
    /// let sym = Symbol::intern("hello");
    /// assert!(sym.eq_str("hello"));
    /// assert!(!sym.eq_str("world"));
    /// ```
    #[inline]
    pub fn eq_str(&self, other: &str) -> bool {
        self.as_str() == other
    }

    /// Returns true if this is a "known" symbol (predefined keywords)
    ///
    /// Known symbols are interned at compiler startup and have indices
    /// in a reserved range (0 to `RESERVED_SYMBOLS_END`).
    ///
    /// # Examples
    ///
    /// ```
    /// use corec_util::symbol::{Symbol, KW_THIS};
    ///
    /// assert!(KW_THIS.is_known());
    /// assert!(!Symbol::intern("my_variable").is_known());
    /// ```
    #[inline]
    pub fn is_known(&self) -> bool {
        self.index < RESERVED_SYMBOLS_END
    }

    /// Get the raw index value
    ///
    /// Useful for serialization or debugging.
    ///
    /// # Examples
    ///
    /// ```
    /// use corec_util::symbol::Symbol;
    ///
    /// let sym = Symbol::intern("test");
    /// let index = sym.as_u32();
    /// ```
    #[inline]
    pub fn as_u32(&self) -> u32 {
        self.index
    }

    /// Create a symbol from a raw index
    ///
    /// # Safety
    ///
    /// The index must correspond to a valid entry in the string table.
    /// Creating a symbol with an invalid index leads to undefined behavior
    /// when calling `as_str()`.
    ///
    /// # Examples
    ///
    /// ```
    /// use corec_util::symbol::Symbol;
    ///
    /// let sym = Symbol::intern("test");
    /// let index = sym.as_u32();
    /// let sym2 = unsafe { Symbol::from_u32_unchecked(index) };
    /// assert_eq!(sym, sym2);
    /// ```
    #[inline]
    pub unsafe fn from_u32_unchecked(index: u32) -> Self {
        Self { index }
    }

    /// Get statistics about the string interner for profiling
    ///
    /// Returns an `InternerStats` struct with detailed information about
    /// the interner's state, including count, capacity, collisions, hits,
    /// and misses.
    ///
    /// # Examples
    ///
    /// ```
    /// use corec_util::symbol::Symbol;
    ///
    /// let stats = Symbol::stats_struct();
    /// println!("Interned {} strings", stats.count);
    /// println!("Hit rate: {:.2}%", stats.hit_rate() * 100.0);
    /// ```
    #[inline]
    pub fn stats_struct() -> InternerStats {
        STRING_TABLE.stats()
    }

    /// Get basic statistics about the string interner (legacy API)
    ///
    /// Returns a tuple of (number of interned strings, hash map capacity).
    /// For more detailed statistics, use [`Symbol::stats_struct`].
    ///
    /// # Examples
    ///
    /// ```
    /// use corec_util::symbol::Symbol;
    ///
    /// let (count, capacity) = Symbol::stats();
    /// println!("Interned {} strings with capacity {}", count, capacity);
    /// ```
    #[inline]
    pub fn stats() -> (usize, usize) {
        let stats = STRING_TABLE.stats();
        (stats.count, stats.capacity)
    }

    /// Intern the special `this` receiver binding.
    ///
    /// # Examples
    ///
    /// ```
    /// use corec_util::symbol::{Symbol, KW_THIS};
    ///
    /// assert_eq!(Symbol::intern_known("this"), KW_THIS);
    /// assert!(!Symbol::intern_known("other").is_known());
    /// ```
    #[inline]
    pub fn intern_known(string: &str) -> Self {
        match string {
            "this" => KW_THIS,
            _ => Self::intern(string),
        }
    }
}

// ============================================================================
// TRAIT IMPLEMENTATIONS
// ============================================================================

impl std::fmt::Debug for Symbol {
    /// Format the symbol for debugging, showing the actual string content
    ///
    /// # Examples
    ///
    /// ```
    /// use corec_util::symbol::Symbol;
    ///
    /// let sym = Symbol::intern("hello");
    /// assert_eq!(format!("{:?}", sym), "Symbol(hello)");
    /// ```
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Symbol({})", self.as_str())
    }
}

impl std::fmt::Display for Symbol {
    /// Format the symbol for display, showing just the string content
    ///
    /// # Examples
    ///
    /// ```
    /// use corec_util::symbol::Symbol;
    ///
    /// let sym = Symbol::intern("hello");
    /// assert_eq!(format!("{}", sym), "hello");
    /// ```
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Pretty-print a symbol with quotes for debugging
///
/// This trait provides optional pretty-printing with quotes to distinguish
/// symbols from regular strings in debug output.
///
/// # Examples
///
/// ```
/// use corec_util::symbol::{Symbol, SymbolPretty};
///
/// let sym = Symbol::intern("hello");
/// assert_eq!(format!("{}", sym.pretty()), "\"hello\"");
/// ```
pub trait SymbolPretty {
    /// Get a pretty-printed version with quotes
    fn pretty(&self) -> SymbolPrettyDisplay<'_>;
}

impl SymbolPretty for Symbol {
    fn pretty(&self) -> SymbolPrettyDisplay<'_> {
        SymbolPrettyDisplay(self)
    }
}

/// Display wrapper for pretty-printing symbols with quotes
pub struct SymbolPrettyDisplay<'a>(&'a Symbol);

impl std::fmt::Display for SymbolPrettyDisplay<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "\"{}\"", self.0.as_str())
    }
}

impl std::fmt::Debug for SymbolPrettyDisplay<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "SymbolPretty(\"{}\")", self.0.as_str())
    }
}

// Ensure Symbol is thread-safe
static_assertions::assert_impl_all!(Symbol: Send, Sync);

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;

    // ========================================================================
    // Basic Interning Tests
    // ========================================================================

    #[test]
    fn test_symbol_intern() {
        let s1 = Symbol::intern("hello");
        let s2 = Symbol::intern("hello");
        let s3 = Symbol::intern("world");

        assert_eq!(s1, s2);
        assert_ne!(s1, s3);
        assert_eq!(s1.as_str(), "hello");
        assert_eq!(s3.as_str(), "world");
    }

    #[test]
    fn test_symbol_display() {
        let s = Symbol::intern("test");
        assert_eq!(format!("{}", s), "test");
        assert_eq!(format!("{:?}", s), "Symbol(test)");
    }

    #[test]
    fn test_symbol_pretty() {
        let s = Symbol::intern("test");
        assert_eq!(format!("{}", s.pretty()), "\"test\"");
        assert_eq!(format!("{:?}", s.pretty()), "SymbolPretty(\"test\")");
    }

    // ========================================================================
    // Symbol Utility Methods
    // ========================================================================

    #[test]
    fn test_symbol_is_empty() {
        assert!(Symbol::intern("").is_empty());
        assert!(!Symbol::intern("a").is_empty());
        assert!(!Symbol::intern("hello").is_empty());
    }

    #[test]
    fn test_symbol_len() {
        assert_eq!(Symbol::intern("").len(), 0);
        assert_eq!(Symbol::intern("a").len(), 1);
        assert_eq!(Symbol::intern("hello").len(), 5);
        assert_eq!(Symbol::intern("你好").len(), 6); // UTF-8 bytes
    }

    #[test]
    fn test_symbol_starts_with() {
        let sym = Symbol::intern("hello_world");
        assert!(sym.starts_with("hello"));
        assert!(sym.starts_with("hello_world"));
        assert!(!sym.starts_with("world"));
        assert!(!sym.starts_with(""));
    }

    #[test]
    fn test_symbol_ends_with() {
        let sym = Symbol::intern("hello_world");
        assert!(sym.ends_with("world"));
        assert!(sym.ends_with("hello_world"));
        assert!(!sym.ends_with("hello"));
        assert!(sym.ends_with(""));
    }

    #[test]
    fn test_symbol_eq_str() {
        let sym = Symbol::intern("hello");
        assert!(sym.eq_str("hello"));
        assert!(!sym.eq_str("world"));
        assert!(!sym.eq_str(""));
    }

    #[test]
    fn test_symbol_to_string() {
        let sym = Symbol::intern("hello");
        let string = sym.to_string();
        assert_eq!(string, "hello");
        assert_eq!(string.len(), 5);
    }

    // ========================================================================
    // Known Symbols Tests
    // ========================================================================

    #[test]
    fn test_symbol_is_known() {
        assert!(KW_THIS.is_known());
        assert!(!Symbol::intern("my_variable").is_known());
    }

    #[test]
    fn test_known_symbols_values() {
        assert_eq!(KW_THIS.as_str(), "this");
    }

    #[test]
    fn test_intern_known() {
        assert_eq!(Symbol::intern_known("this"), KW_THIS);

        let unknown = Symbol::intern_known("unknown_name");
        assert_eq!(unknown.as_str(), "unknown_name");
        assert!(!unknown.is_known());
    }

    // ========================================================================
    // Raw Index Tests
    // ========================================================================

    #[test]
    fn test_from_u32_unchecked() {
        let sym = Symbol::intern("test");
        let index = sym.as_u32();
        let sym2 = unsafe { Symbol::from_u32_unchecked(index) };
        assert_eq!(sym, sym2);
    }

    #[test]
    fn test_as_u32() {
        let sym = Symbol::intern("test");
        let index = sym.as_u32();
        assert!(index < Symbol::MAX_INDEX);
    }

    // ========================================================================
    // Statistics Tests
    // ========================================================================

    #[test]
    fn test_stats() {
        let (count, capacity) = Symbol::stats();
        assert!(count > 0); // Known symbols are pre-interned
        assert!(capacity >= count);
    }

    #[test]
    fn test_stats_struct() {
        let stats = Symbol::stats_struct();
        assert!(stats.count > 0);
        assert!(stats.capacity >= stats.count);
        assert!(stats.load_factor() >= 0.0);
        assert!(stats.load_factor() <= 1.0);
        assert!(stats.hit_rate() >= 0.0);
        assert!(stats.hit_rate() <= 1.0);
    }

    #[test]
    fn test_interner_stats_methods() {
        let stats = InternerStats::new(100, 200, 5, 80, 20);

        assert_eq!(stats.count, 100);
        assert_eq!(stats.capacity, 200);
        assert_eq!(stats.collisions, 5);
        assert_eq!(stats.hits, 80);
        assert_eq!(stats.misses, 20);

        assert_eq!(stats.load_factor(), 0.5);
        assert!(!stats.is_near_capacity());

        assert_eq!(stats.hit_rate(), 0.8);
        assert_eq!(stats.total_operations(), 100);
        assert_eq!(stats.memory_efficiency(), 1.0);

        let stats_full = InternerStats::new(100, 120, 0, 0, 0);
        assert!(stats_full.is_near_capacity());

        let stats_empty = InternerStats::new(0, 0, 0, 0, 0);
        assert_eq!(stats_empty.load_factor(), 0.0);
        assert_eq!(stats_empty.hit_rate(), 0.0);
    }

    // ========================================================================
    // Thread Safety Tests
    // ========================================================================

    #[test]
    fn test_concurrent_intern() {
        let handles: Vec<_> = (0..10)
            .map(|i| {
                thread::spawn(move || {
                    let s = Symbol::intern(&format!("thread_{}", i));
                    (i, s)
                })
            })
            .collect();

        let results: Vec<_> = handles.into_iter().map(|h| h.join().unwrap()).collect();

        // All symbols should be unique
        let symbols: Vec<_> = results.iter().map(|(_, s)| *s).collect();
        for i in 0..symbols.len() {
            for j in (i + 1)..symbols.len() {
                assert_ne!(symbols[i], symbols[j]);
            }
        }
    }

    #[test]
    fn test_concurrent_same_string() {
        let handles: Vec<_> = (0..10)
            .map(|_| {
                thread::spawn(|| Symbol::intern("concurrent_same"))
            })
            .collect();

        let results: Vec<_> = handles.into_iter().map(|h| h.join().unwrap()).collect();

        // All should be the same symbol
        for symbol in &results[1..] {
            assert_eq!(results[0], *symbol);
        }
    }

    #[test]
    fn test_thread_safety_stress() {
        const THREADS: usize = 20;
        const ITERATIONS: usize = 50;

        let handles: Vec<_> = (0..THREADS)
            .map(|t| {
                thread::spawn(move || {
                    let mut local_symbols = Vec::new();
                    for i in 0..ITERATIONS {
                        let s = Symbol::intern(&format!("stress_{}_{}", t, i));
                        local_symbols.push(s);
                    }
                    local_symbols
                })
            })
            .collect();

        let results: Vec<_> = handles.into_iter().map(|h| h.join().unwrap()).collect();

        // Verify all symbols within each thread are unique
        for symbols in &results {
            for i in 0..symbols.len() {
                for j in (i + 1)..symbols.len() {
                    assert_ne!(symbols[i], symbols[j]);
                }
            }
        }
    }

    #[test]
    fn test_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Symbol>();
        assert_send_sync::<InternerStats>();
    }

    // ========================================================================
    // Edge Cases
    // ========================================================================

    #[test]
    fn test_empty_string() {
        let s = Symbol::intern("");
        assert_eq!(s.as_str(), "");
        assert!(s.is_empty());
        assert_eq!(s.len(), 0);
    }

    #[test]
    fn test_unicode_strings() {
        let test_cases = ["你好", "世界", "🦀", "こんにちは", "Привет"];

        for test in &test_cases {
            let sym = Symbol::intern(test);
            assert_eq!(sym.as_str(), *test);
        }
    }

    #[test]
    fn test_long_strings() {
        let long_string = "a".repeat(10000);
        let sym = Symbol::intern(&long_string);
        assert_eq!(sym.as_str(), long_string.as_str());
        assert_eq!(sym.len(), 10000);
    }

    #[test]
    fn test_special_characters() {
        let special = "hello\nworld\t!";
        let sym = Symbol::intern(special);
        assert_eq!(sym.as_str(), special);
    }

    // ========================================================================
    // Property-Based Tests (Manual Implementation)
    // ========================================================================

    #[test]
    fn test_idempotence() {
        // Property: intern(intern(x)) == intern(x)
        let test_strings = ["hello", "world", "test", "foo", "bar"];

        for s in &test_strings {
            let sym1 = Symbol::intern(s);
            let sym2 = Symbol::intern(s);
            let sym3 = Symbol::intern(&sym1.as_str());

            assert_eq!(sym1, sym2);
            assert_eq!(sym1, sym3);
        }
    }

    #[test]
    fn test_uniqueness() {
        // Property: different strings get different symbols
        let strings = ["abc", "def", "ghi", "jkl", "mno"];

        for i in 0..strings.len() {
            for j in (i + 1)..strings.len() {
                let sym_i = Symbol::intern(strings[i]);
                let sym_j = Symbol::intern(strings[j]);
                assert_ne!(sym_i, sym_j);
            }
        }
    }

    #[test]
    fn test_roundtrip() {
        // Property: intern(to_string(intern(x))) == intern(x)
        let test_strings = ["hello", "world", "test"];

        for s in &test_strings {
            let sym1 = Symbol::intern(s);
            let string = sym1.to_string();
            let sym2 = Symbol::intern(&string);
            assert_eq!(sym1, sym2);
        }
    }

    #[test]
    fn test_comparison_consistency() {
        // Property: symbol comparison is consistent with string comparison
        let pairs = [
            ("hello", "hello", true),
            ("hello", "world", false),
            ("", "", true),
            ("a", "a", true),
            ("a", "b", false),
        ];

        for (s1, s2, expected_eq) in &pairs {
            let sym1 = Symbol::intern(s1);
            let sym2 = Symbol::intern(s2);

            assert_eq!(sym1 == sym2, *expected_eq);
            assert_eq!(sym1.eq_str(s2), *expected_eq);
            assert_eq!(s1 == s2, *expected_eq);
        }
    }

    // ========================================================================
    // Performance Tests (Not Benchmarks, but Performance-Related)
    // ========================================================================

    #[test]
    fn test_hit_miss_tracking() {
        STRING_TABLE.reset_stats();

        // First intern should be a miss
        let _ = Symbol::intern("unique_perf_test");
        let stats = Symbol::stats_struct();
        assert!(stats.misses >= 1);

        // Second intern of same string should be a hit
        let _ = Symbol::intern("unique_perf_test");
        let stats = Symbol::stats_struct();
        assert!(stats.hits >= 1);

        // Verify hit rate calculation
        assert!(stats.hit_rate() > 0.0);
    }

    #[test]
    fn test_known_symbol_performance() {
        // Known symbols should have predictable indices
        assert!(KW_THIS.index < RESERVED_SYMBOLS_END);

        // Known symbols should be fast to look up
        for _ in 0..1000 {
            let _ = Symbol::intern_known("this");
        }
    }
}
