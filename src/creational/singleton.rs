// Pattern: Singleton - one lazily created instance per process.
// Creation goes through `OnceLock`, so concurrent first accesses still agree
// on a single instance.

use std::fmt;
use std::io::Write;
use std::ptr;
use std::sync::OnceLock;
use std::thread;

use tracing::{debug, info};
use uuid::Uuid;

use crate::error::Result;

// ============================================================================
// Singleton
// ============================================================================

/// The only instance lives behind [`Singleton::instance`]. The private field
/// keeps code outside this module from constructing one.
pub struct Singleton {
    id: Uuid,
}

impl Singleton {
    fn create() -> Self {
        let singleton = Singleton { id: Uuid::new_v4() };
        info!(id = %singleton.id, "creating single instance now");
        singleton
    }

    /// Returns the process-wide instance, creating it on first call.
    ///
    /// There is no other way to obtain one:
    ///
    /// ```compile_fail
    /// use oo_design_patterns::creational::singleton::SingletonHolder;
    /// let second = SingletonHolder::new();
    /// ```
    pub fn instance() -> &'static Singleton {
        static GLOBAL: SingletonHolder = SingletonHolder::new();
        GLOBAL.get()
    }

    pub fn id(&self) -> Uuid {
        self.id
    }
}

/// Identity, not structure: two references are equal only if they point at
/// the same instance.
impl PartialEq for Singleton {
    fn eq(&self, other: &Self) -> bool {
        ptr::eq(self, other)
    }
}

impl Eq for Singleton {}

impl fmt::Debug for Singleton {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("Singleton").field("id", &self.id).finish()
    }
}

// ============================================================================
// Holder
// ============================================================================

/// Storage for one lazily created [`Singleton`]. Only `Singleton::instance`
/// and this module's tests build one. Never reset once initialized.
struct SingletonHolder {
    cell: OnceLock<Singleton>,
}

impl SingletonHolder {
    const fn new() -> Self {
        Self {
            cell: OnceLock::new(),
        }
    }

    fn get(&self) -> &Singleton {
        if let Some(existing) = self.cell.get() {
            debug!(id = %existing.id, "single instance already created");
            return existing;
        }
        self.cell.get_or_init(Singleton::create)
    }

    #[cfg(test)]
    fn is_initialized(&self) -> bool {
        self.cell.get().is_some()
    }
}

// ============================================================================
// Client
// ============================================================================

/// Fetches the instance twice and writes whether both handles are the same.
pub fn client_code<W: Write + ?Sized>(out: &mut W) -> Result<()> {
    let s1 = Singleton::instance();
    let s2 = Singleton::instance();
    writeln!(out, "{}", s1 == s2)?;
    Ok(())
}

pub fn run<W: Write + ?Sized>(out: &mut W) -> Result<()> {
    client_code(out)
}

/// Has `threads` threads hit the accessor at once and reports whether every
/// thread got the same instance.
pub fn race_demo(threads: usize) -> bool {
    race_on(threads, Singleton::instance)
}

fn race_on<'a, F>(threads: usize, access: F) -> bool
where
    F: Fn() -> &'a Singleton + Sync,
{
    // Raw pointers are not Send, so threads report the address instead.
    let seen: Vec<usize> = thread::scope(|scope| {
        let handles: Vec<_> = (0..threads)
            .map(|_| scope.spawn(|| access() as *const Singleton as usize))
            .collect();
        handles
            .into_iter()
            .filter_map(|handle| handle.join().ok())
            .collect()
    });
    seen.len() == threads && seen.windows(2).all(|pair| pair[0] == pair[1])
}

// ============================================================================
// Tests
// ============================================================================
