//! Text renderings of a [`Tree`]. Both walk the tree in order and leave it untouched.
//!
//! # Examples
//!
//! ```
//! use roster::record::Employee;
//! use roster::report;
//! use roster::tree::Tree;
//!
//! let mut tree = Tree::new();
//! tree.insert(Employee::new(5, 20, "A")).unwrap();
//! tree.insert(Employee::new(3, 21, "B")).unwrap();
//!
//! assert_eq!(report::to_csv(&tree), "3,B,21\n5,A,20\n");
//! assert_eq!(tree.len(), 2);
//! ```

use std::borrow::Cow;

use crate::tree::Tree;

const ID_WIDTH: usize = 10;
const LEVEL_WIDTH: usize = 8;

/// What [`report`] prints for a tree with no employees.
pub const EMPTY_REPORT: &str = "Tree is empty";

/// Lists every id in ascending order next to the depth of its node, under an `ID:`/`Level:`
/// header. An empty tree is reported as [`EMPTY_REPORT`].
pub fn report(tree: &Tree) -> String {
    if tree.is_empty() {
        return EMPTY_REPORT.to_string();
    }

    let mut out = format!("{:<ID_WIDTH$}{:<LEVEL_WIDTH$}\n", "ID:", "Level:");
    for visit in tree {
        out.push_str(&format!(
            "{:<ID_WIDTH$}{:<LEVEL_WIDTH$}\n",
            visit.employee.id, visit.depth
        ));
    }
    out
}

/// One `id,name,age` line per employee in ascending id order.
///
/// A name holding a comma, a double quote or a line break is wrapped in double quotes with any
/// inner quotes doubled, so every line still splits into exactly three fields.
pub fn to_csv(tree: &Tree) -> String {
    tree.traverse()
        .map(|visit| {
            let employee = visit.employee;
            format!(
                "{},{},{}\n",
                employee.id,
                csv_field(&employee.name),
                employee.age
            )
        })
        .collect()
}

fn csv_field(field: &str) -> Cow<'_, str> {
    if field.contains([',', '"', '\n', '\r']) {
        Cow::Owned(format!("\"{}\"", field.replace('"', "\"\"")))
    } else {
        Cow::Borrowed(field)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::Employee;

    fn sample() -> Tree {
        let mut tree = Tree::new();
        tree.insert(Employee::new(5, 20, "A")).unwrap();
        tree.insert(Employee::new(3, 21, "B")).unwrap();
        tree.insert(Employee::new(8, 22, "C")).unwrap();
        tree
    }

    #[test]
    fn report_empty() {
        assert_eq!(report(&Tree::new()), "Tree is empty");
    }

    #[test]
    fn report_lists_ids_and_levels() {
        let expected = "\
ID:       Level:  
3         2       
5         1       
8         2       
";
        assert_eq!(report(&sample()), expected);
    }

    #[test]
    fn report_uses_current_depth() {
        let mut tree = sample();
        tree.insert(Employee::new(1, 40, "D")).unwrap();
        tree.remove(3);

        let text = report(&tree);
        let rows: Vec<_> = text
            .lines()
            .skip(1)
            .map(|line| line.split_whitespace().collect::<Vec<_>>())
            .collect();
        assert_eq!(rows, vec![vec!["1", "2"], vec!["5", "1"], vec!["8", "2"]]);
    }

    #[test]
    fn csv_is_sorted_and_non_destructive() {
        let tree = sample();

        assert_eq!(to_csv(&tree), "3,B,21\n5,A,20\n8,C,22\n");
        assert_eq!(to_csv(&tree), "3,B,21\n5,A,20\n8,C,22\n");
        assert_eq!(tree.len(), 3);
    }

    #[test]
    fn csv_quotes_awkward_names() {
        let mut tree = Tree::new();
        tree.insert(Employee::new(1, 30, "Hopper, Grace")).unwrap();
        tree.insert(Employee::new(2, 31, "Ada \"Countess\" Lovelace")).unwrap();
        tree.insert(Employee::new(3, 32, "Plain")).unwrap();

        assert_eq!(
            to_csv(&tree),
            "1,\"Hopper, Grace\",30\n2,\"Ada \"\"Countess\"\" Lovelace\",31\n3,Plain,32\n"
        );
    }

    #[test]
    fn csv_field_untouched_when_plain() {
        assert!(matches!(csv_field("Grace"), Cow::Borrowed("Grace")));
        assert_eq!(csv_field("a\nb"), "\"a\nb\"");
    }

    #[test]
    fn csv_empty() {
        assert_eq!(to_csv(&Tree::new()), "");
    }
}
