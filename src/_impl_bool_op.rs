use crate::BoolOp;
use crate::BoolOp::*;
use std::fmt::{Display, Error, Formatter};

impl Display for BoolOp {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), Error> {
        let symbol = match self {
            And => "&",
            Or => "|",
        };
        write!(f, "{}", symbol)?;
        Ok(())
    }
}
