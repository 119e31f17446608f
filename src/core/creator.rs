use crate::core::{ConcreteProduct, Creator, Product};

#[derive(Debug, Clone, Copy, Default)]
pub struct ConcreteCreator;

impl ConcreteCreator {
    pub fn new() -> Self {
        Self
    }
}

impl Creator for ConcreteCreator {
    fn factory_method(&self) -> Box<dyn Product> {
        Box::new(ConcreteProduct)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_factory_method_returns_concrete_product() {
        let product = ConcreteCreator::new().factory_method();
        assert_eq!(product.output(), "Operation of ConcreteProduct");
        assert_eq!(format!("{:?}", product), "ConcreteProduct");
    }

    #[test]
    fn test_creator_usable_as_trait_object() {
        let creators: Vec<Box<dyn Creator>> = vec![Box::new(ConcreteCreator), Box::new(ConcreteCreator)];
        for creator in &creators {
            assert_eq!(creator.factory_method().output(), "Operation of ConcreteProduct");
            creator.do_something();
        }
    }
}
