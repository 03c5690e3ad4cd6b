use roster::report;
use roster::{Employee, Tree};

use std::collections::BTreeMap;

use quickcheck_macros::quickcheck;

use crate::Op;

fn employee(id: i8) -> Employee {
    Employee::new(id.into(), i32::from(id) + 100, format!("E{}", id))
}

/// Applies a set of operations to a tree and a map.
/// This way we can ensure that after a random smattering of inserts
/// and deletes we have the same set of keys in the map.
fn do_ops(ops: &[Op], tree: &mut Tree, map: &mut BTreeMap<i32, Employee>) {
    for op in ops {
        match *op {
            Op::Insert(id) => {
                let employee = employee(id);
                if tree.insert(employee.clone()).is_ok() {
                    map.insert(employee.id, employee);
                }
            }
            Op::Remove(id) => {
                tree.remove(id.into());
                map.remove(&i32::from(id));
            }
        }
    }
}

#[quickcheck]
fn fuzz_multiple_operations_i8(ops: Vec<Op>) -> bool {
    let mut tree = Tree::new();
    let mut map = BTreeMap::new();

    do_ops(&ops, &mut tree, &mut map);
    tree.len() == map.len()
        && map.iter().all(|(id, employee)| {
            tree.find(*id).map(|found| (&found.name, found.age))
                == Some((&employee.name, employee.age))
        })
}

#[quickcheck]
fn traversal_is_strictly_ascending(ops: Vec<Op>) -> bool {
    let mut tree = Tree::new();
    let mut map = BTreeMap::new();

    do_ops(&ops, &mut tree, &mut map);
    let ids: Vec<_> = tree.traverse().map(|visit| visit.employee.id).collect();
    ids.windows(2).all(|pair| pair[0] < pair[1]) && ids.iter().eq(map.keys())
}

#[quickcheck]
fn depths_bounded_by_height(ops: Vec<Op>) -> bool {
    let mut tree = Tree::new();
    do_ops(&ops, &mut tree, &mut BTreeMap::new());

    let height = tree.height();
    tree.traverse()
        .all(|visit| (1..=height).contains(&visit.depth))
        && (tree.is_empty() || tree.traverse().filter(|visit| visit.depth == 1).count() == 1)
}

#[quickcheck]
fn contains_not(xs: Vec<i8>, nots: Vec<i8>) -> bool {
    let mut tree = Tree::new();
    for x in &xs {
        let _ = tree.insert(employee(*x));
    }

    nots.iter()
        .filter(|x| !xs.contains(*x))
        .all(|x| tree.find((*x).into()).is_none())
}

#[quickcheck]
fn clear_then_empty(xs: Vec<i8>) -> bool {
    let mut tree = Tree::new();
    for x in &xs {
        let _ = tree.insert(employee(*x));
    }

    tree.clear();
    tree.is_empty() && tree.len() == 0 && tree.traverse().next().is_none()
}

#[quickcheck]
fn csv_has_a_line_per_employee(xs: Vec<i8>) -> bool {
    let mut tree = Tree::new();
    for x in &xs {
        let _ = tree.insert(employee(*x));
    }

    let csv = report::to_csv(&tree);
    csv.lines().count() == tree.len()
        && csv
            .lines()
            .zip(tree.traverse())
            .all(|(line, visit)| line.starts_with(&format!("{},", visit.employee.id)))
}
