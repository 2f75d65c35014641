// Pattern: Builder - Director sequences steps, ConcreteBuilder assembles a Product.
// The client binds a builder to the director, runs a recipe, then collects the
// result from the builder itself.

use std::cell::{RefCell, RefMut};
use std::fmt;
use std::io::Write;
use std::mem;
use std::rc::Rc;

use tracing::debug;

use crate::error::{PatternError, Result};

pub const PART_A: &str = "PartA1";
pub const PART_B: &str = "PartB1";
pub const PART_C: &str = "PartC1";

// ============================================================================
// Product
// ============================================================================

/// An ordered, append-only list of part tokens.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Product {
    parts: Vec<String>,
}

impl Product {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, part: impl Into<String>) {
        self.parts.push(part.into());
    }

    pub fn parts(&self) -> &[String] {
        &self.parts
    }

    pub fn len(&self) -> usize {
        self.parts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.parts.is_empty()
    }

    /// Writes `Product parts: A,B,C` as a single line.
    pub fn list_parts<W: Write + ?Sized>(&self, out: &mut W) -> Result<()> {
        writeln!(out, "{self}")?;
        Ok(())
    }
}

impl fmt::Display for Product {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Product parts: {}", self.parts.join(","))
    }
}

// ============================================================================
// Builder capability
// ============================================================================

/// Production steps shared by every builder. Retrieval is left to each
/// concrete builder, since different builders may produce unrelated products.
pub trait Builder {
    fn produce_part_a(&mut self);
    fn produce_part_b(&mut self);
    fn produce_part_c(&mut self);
}

// ============================================================================
// ConcreteBuilder
// ============================================================================

#[derive(Debug)]
pub struct ConcreteBuilder {
    product: Product,
}

impl ConcreteBuilder {
    pub fn new() -> Self {
        let mut builder = Self {
            product: Product::new(),
        };
        builder.reset();
        builder
    }

    /// Drops whatever was assembled so far and starts on a blank product.
    pub fn reset(&mut self) {
        let discarded = mem::take(&mut self.product);
        if !discarded.is_empty() {
            debug!(discarded_parts = discarded.len(), "builder reset");
        }
    }

    /// Hands out the product assembled since the last reset and leaves the
    /// builder holding a fresh, empty one.
    pub fn get_product(&mut self) -> Product {
        let product = mem::take(&mut self.product);
        debug!(parts = product.len(), "product handed out");
        self.reset();
        product
    }
}

impl Default for ConcreteBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl Builder for ConcreteBuilder {
    fn produce_part_a(&mut self) {
        self.product.add(PART_A);
    }

    fn produce_part_b(&mut self) {
        self.product.add(PART_B);
    }

    fn produce_part_c(&mut self) {
        self.product.add(PART_C);
    }
}

// ============================================================================
// Director
// ============================================================================

/// Shared handle to a builder. The client keeps its own clone so it can
/// collect products while the director drives the steps.
pub type SharedBuilder = Rc<RefCell<dyn Builder>>;

#[derive(Default)]
pub struct Director {
    builder: Option<SharedBuilder>,
}

impl Director {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_builder(builder: SharedBuilder) -> Self {
        let mut director = Self::new();
        director.set_builder(builder);
        director
    }

    /// Rebinds the director. The previous builder, if any, is released.
    /// An `Rc<RefCell<ConcreteBuilder>>` coerces at the call site.
    pub fn set_builder(&mut self, builder: SharedBuilder) {
        self.builder = Some(builder);
    }

    pub fn has_builder(&self) -> bool {
        self.builder.is_some()
    }

    pub fn build_minimal_viable_product(&self) -> Result<()> {
        debug!("director: minimal viable product");
        let mut builder = self.bound()?;
        builder.produce_part_a();
        Ok(())
    }

    pub fn build_full_viable_product(&self) -> Result<()> {
        debug!("director: full viable product");
        let mut builder = self.bound()?;
        builder.produce_part_a();
        builder.produce_part_b();
        builder.produce_part_c();
        Ok(())
    }

    fn bound(&self) -> Result<RefMut<'_, dyn Builder + 'static>> {
        let builder = self.builder.as_ref().ok_or(PatternError::NoBuilderBound)?;
        builder
            .try_borrow_mut()
            .map_err(|_| PatternError::BuilderBusy)
    }
}

impl fmt::Debug for Director {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("Director")
            .field("bound", &self.has_builder())
            .finish()
    }
}

// ============================================================================
// Client
// ============================================================================

/// Runs the three classic scenarios: minimal, full, and a custom sequence
/// issued directly against the builder.
pub fn client_code<W: Write + ?Sized>(director: &mut Director, out: &mut W) -> Result<()> {
    let builder = Rc::new(RefCell::new(ConcreteBuilder::new()));
    director.set_builder(builder.clone());

    writeln!(out, "Standard basic product:")?;
    director.build_minimal_viable_product()?;
    builder.borrow_mut().get_product().list_parts(out)?;

    writeln!(out, "Standard full featured product:")?;
    director.build_full_viable_product()?;
    builder.borrow_mut().get_product().list_parts(out)?;

    // The director is optional; the client can drive the builder itself.
    writeln!(out, "Custom product:")?;
    let product = {
        let mut builder = builder.borrow_mut();
        builder.produce_part_a();
        builder.produce_part_c();
        builder.get_product()
    };
    product.list_parts(out)?;

    Ok(())
}

pub fn run<W: Write + ?Sized>(out: &mut W) -> Result<()> {
    let mut director = Director::new();
    client_code(&mut director, out)
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    // Test double: records the order of calls instead of building anything.
    #[derive(Default)]
    struct RecordingBuilder {
        calls: Vec<char>,
    }

    impl Builder for RecordingBuilder {
        fn produce_part_a(&mut self) {
            self.calls.push('A');
        }
        fn produce_part_b(&mut self) {
            self.calls.push('B');
        }
        fn produce_part_c(&mut self) {
            self.calls.push('C');
        }
    }

    fn shared() -> Rc<RefCell<ConcreteBuilder>> {
        Rc::new(RefCell::new(ConcreteBuilder::new()))
    }

    #[test]
    fn test_product_add_keeps_order() {
        let mut product = Product::new();
        product.add("x");
        product.add(String::from("y"));
        product.add("x");
        assert_eq!(product.parts(), ["x", "y", "x"]);
        assert_eq!(product.len(), 3);
    }

    #[test]
    fn test_list_parts_format() {
        let mut product = Product::new();
        product.add(PART_A);
        product.add(PART_B);

        let mut out = Vec::new();
        product.list_parts(&mut out).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "Product parts: PartA1,PartB1\n");
    }

    #[test]
    fn test_list_parts_empty() {
        let mut out = Vec::new();
        Product::new().list_parts(&mut out).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "Product parts: \n");
    }

    #[test]
    fn test_fresh_builder_yields_empty_product() {
        let mut builder = ConcreteBuilder::new();
        assert!(builder.get_product().is_empty());
    }

    #[test]
    fn test_get_product_resets_builder() {
        let mut builder = ConcreteBuilder::new();
        builder.produce_part_b();

        assert_eq!(builder.get_product().parts(), [PART_B]);
        assert!(builder.get_product().is_empty());
    }

    #[test]
    fn test_reset_discards_parts() {
        let mut builder = ConcreteBuilder::default();
        builder.produce_part_a();
        builder.produce_part_b();
        builder.reset();
        builder.produce_part_c();

        assert_eq!(builder.get_product().parts(), [PART_C]);
    }

    #[test]
    fn test_minimal_viable_product() {
        let builder = shared();
        let director = Director::with_builder(builder.clone());

        director.build_minimal_viable_product().unwrap();
        assert_eq!(builder.borrow_mut().get_product().parts(), [PART_A]);
    }

    #[test]
    fn test_full_viable_product() {
        let builder = shared();
        let director = Director::with_builder(builder.clone());

        director.build_full_viable_product().unwrap();
        assert_eq!(
            builder.borrow_mut().get_product().parts(),
            [PART_A, PART_B, PART_C]
        );
    }

    #[test]
    fn test_custom_sequence_without_director() {
        let mut builder = ConcreteBuilder::new();
        builder.produce_part_a();
        builder.produce_part_c();
        assert_eq!(builder.get_product().parts(), [PART_A, PART_C]);
    }

    #[test]
    fn test_director_without_builder() {
        let director = Director::new();
        assert!(!director.has_builder());
        assert!(matches!(
            director.build_minimal_viable_product(),
            Err(PatternError::NoBuilderBound)
        ));
        assert!(matches!(
            director.build_full_viable_product(),
            Err(PatternError::NoBuilderBound)
        ));
    }

    #[test]
    fn test_director_with_builder_borrowed_elsewhere() {
        let builder = shared();
        let director = Director::with_builder(builder.clone());

        let held = builder.borrow();
        assert!(matches!(
            director.build_minimal_viable_product(),
            Err(PatternError::BuilderBusy)
        ));
        assert!(matches!(
            director.build_full_viable_product(),
            Err(PatternError::BuilderBusy)
        ));
        drop(held);

        director.build_minimal_viable_product().unwrap();
        assert_eq!(builder.borrow_mut().get_product().parts(), [PART_A]);
    }

    #[test]
    fn test_director_accepts_shared_handle() {
        let recorder = Rc::new(RefCell::new(RecordingBuilder::default()));
        let handle: SharedBuilder = recorder.clone();
        let mut director = Director::new();
        director.set_builder(Rc::clone(&handle));

        director.build_minimal_viable_product().unwrap();
        assert_eq!(recorder.borrow().calls, ['A']);
    }

    #[test]
    fn test_director_rebinding() {
        let first = shared();
        let second = shared();
        let mut director = Director::with_builder(first.clone());

        director.build_minimal_viable_product().unwrap();
        director.set_builder(second.clone());
        director.build_full_viable_product().unwrap();

        assert_eq!(first.borrow_mut().get_product().len(), 1);
        assert_eq!(second.borrow_mut().get_product().len(), 3);
    }

    #[test]
    fn test_director_works_with_any_builder() {
        let recorder = Rc::new(RefCell::new(RecordingBuilder::default()));
        let director = Director::with_builder(recorder.clone());

        director.build_full_viable_product().unwrap();
        director.build_minimal_viable_product().unwrap();

        assert_eq!(recorder.borrow().calls, ['A', 'B', 'C', 'A']);
    }

    #[test]
    fn test_director_releases_builder_on_drop() {
        let builder = shared();
        let director = Director::with_builder(builder.clone());
        assert_eq!(Rc::strong_count(&builder), 2);
        drop(director);
        assert_eq!(Rc::strong_count(&builder), 1);
    }

    #[test]
    fn test_client_code_transcript() {
        let mut out = Vec::new();
        run(&mut out).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "Standard basic product:\n\
             Product parts: PartA1\n\
             Standard full featured product:\n\
             Product parts: PartA1,PartB1,PartC1\n\
             Custom product:\n\
             Product parts: PartA1,PartC1\n"
        );
    }

    #[derive(Debug, Clone, Copy)]
    enum Step {
        A,
        B,
        C,
    }

    fn step() -> impl Strategy<Value = Step> {
        prop_oneof![Just(Step::A), Just(Step::B), Just(Step::C)]
    }

    proptest! {
        #[test]
        fn test_product_matches_call_sequence(steps in prop::collection::vec(step(), 0..32)) {
            let mut builder = ConcreteBuilder::new();
            let mut expected = Vec::new();
            for step in &steps {
                match step {
                    Step::A => { builder.produce_part_a(); expected.push(PART_A); }
                    Step::B => { builder.produce_part_b(); expected.push(PART_B); }
                    Step::C => { builder.produce_part_c(); expected.push(PART_C); }
                }
            }

            let product = builder.get_product();
            prop_assert_eq!(product.parts(), expected.as_slice());
            prop_assert!(builder.get_product().is_empty());
        }
    }
}
