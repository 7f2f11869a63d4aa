//! Arithmetic on recipes.
//!
//! The compound forms (`+=`, `-=`, `*=`, `/=`) edit the receiver. The plain
//! forms on `&Comida` clone first and leave the operand untouched; on an owned
//! `Comida` they consume it and reuse its storage.

use std::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Sub, SubAssign};

use crate::domain::comida::{Comida, Items, Target};

impl<T: Into<Items>> AddAssign<T> for Comida {
    fn add_assign(&mut self, items: T) {
        self.add_into(items);
    }
}

impl<T: Into<Items>> Add<T> for &Comida {
    type Output = Comida;

    fn add(self, items: T) -> Comida {
        let mut sum = self.clone();
        sum.add_into(items);
        sum
    }
}

impl<T: Into<Items>> Add<T> for Comida {
    type Output = Comida;

    fn add(mut self, items: T) -> Comida {
        self.add_into(items);
        self
    }
}

impl<'a, T: Into<Target<'a>>> SubAssign<T> for Comida {
    fn sub_assign(&mut self, target: T) {
        self.decrement_or_remove(target);
    }
}

impl<'a, T: Into<Target<'a>>> Sub<T> for &Comida {
    type Output = Comida;

    fn sub(self, target: T) -> Comida {
        let mut rest = self.clone();
        rest.decrement_or_remove(target);
        rest
    }
}

impl<'a, T: Into<Target<'a>>> Sub<T> for Comida {
    type Output = Comida;

    fn sub(mut self, target: T) -> Comida {
        self.decrement_or_remove(target);
        self
    }
}

impl MulAssign<f64> for Comida {
    fn mul_assign(&mut self, factor: f64) {
        self.scale_into(factor);
    }
}

impl Mul<f64> for &Comida {
    type Output = Comida;

    fn mul(self, factor: f64) -> Comida {
        let mut scaled = self.clone();
        scaled.scale_into(factor);
        scaled
    }
}

impl Mul<f64> for Comida {
    type Output = Comida;

    fn mul(mut self, factor: f64) -> Comida {
        self.scale_into(factor);
        self
    }
}

impl DivAssign<f64> for Comida {
    fn div_assign(&mut self, divisor: f64) {
        self.divide_into(divisor);
    }
}

impl Div<f64> for &Comida {
    type Output = Comida;

    fn div(self, divisor: f64) -> Comida {
        let mut scaled = self.clone();
        scaled.divide_into(divisor);
        scaled
    }
}

impl Div<f64> for Comida {
    type Output = Comida;

    fn div(mut self, divisor: f64) -> Comida {
        self.divide_into(divisor);
        self
    }
}
