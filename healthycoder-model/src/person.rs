/// Physical measurements of a single person.
///
/// Height is expressed in meters and weight in kilograms.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Person {
    height: f64,
    weight: f64,
}

impl Person {
    pub fn new(height: f64, weight: f64) -> Self {
        Self { height, weight }
    }
    pub fn height(&self) -> f64 {
        self.height
    }
    pub fn weight(&self) -> f64 {
        self.weight
    }
}
