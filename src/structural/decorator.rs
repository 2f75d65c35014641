// Pattern: Decorator - toppings wrap a pizza and add to its price.

use std::io::Write;

use crate::error::Result;

pub trait Pizza {
    fn price(&self) -> u32;
}

pub struct VeggieMania;

impl Pizza for VeggieMania {
    fn price(&self) -> u32 {
        15
    }
}

pub struct CheeseTopping {
    pizza: Box<dyn Pizza>,
}

impl CheeseTopping {
    pub fn new(pizza: impl Pizza + 'static) -> Self {
        Self {
            pizza: Box::new(pizza),
        }
    }
}

impl Pizza for CheeseTopping {
    fn price(&self) -> u32 {
        self.pizza.price() + 10
    }
}

pub struct TomatoTopping {
    pizza: Box<dyn Pizza>,
}

impl TomatoTopping {
    pub fn new(pizza: impl Pizza + 'static) -> Self {
        Self {
            pizza: Box::new(pizza),
        }
    }
}

impl Pizza for TomatoTopping {
    fn price(&self) -> u32 {
        self.pizza.price() + 7
    }
}

pub fn run<W: Write + ?Sized>(out: &mut W) -> Result<()> {
    let pizza = VeggieMania;
    let with_cheese = CheeseTopping::new(pizza);
    let with_cheese_and_tomato = TomatoTopping::new(with_cheese);

    writeln!(
        out,
        "Price of veggieMania with tomato and cheese topping is {}",
        with_cheese_and_tomato.price()
    )?;
    Ok(())
}
