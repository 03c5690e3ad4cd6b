mod tree;

use quickcheck::{Arbitrary, Gen};

/// Something to do to a tree and to the model it's checked against.
#[derive(Copy, Clone, Debug)]
pub enum Op {
    /// Insert an employee with this id
    Insert(i8),
    /// Remove the employee with this id
    Remove(i8),
}

impl Arbitrary for Op {
    fn arbitrary(g: &mut Gen) -> Self {
        match g.choose(&[0, 0, 1]).unwrap() {
            0 => Op::Insert(i8::arbitrary(g)),
            1 => Op::Remove(i8::arbitrary(g)),
            _ => unreachable!(),
        }
    }
}
