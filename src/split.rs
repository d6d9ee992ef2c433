use crate::node::Node;
use crate::Envelope;

/// Sort an overflowing child list along the split axis with the smaller
/// total distribution margin. Both candidate orderings are measured; the
/// list is left sorted by Y1 and re-sorted by X1 only when X wins.
pub(crate) fn choose_split_axis<T>(children: &mut [Node<T>], min_entries: usize) {
    let x_margin = all_dist_margin(children, min_entries, x_min_key);
    let y_margin = all_dist_margin(children, min_entries, y_min_key);
    if x_margin < y_margin {
        children.sort_by_key(x_min_key);
    }
}

/// Split position over `[min_entries, M - min_entries]` minimizing the
/// overlap between the two distributions, combined area as tie-break.
/// Earlier candidates win exact ties.
pub(crate) fn choose_split_index<T>(children: &[Node<T>], min_entries: usize) -> usize {
    let total = children.len();
    let mut best_index = min_entries;
    let mut min_overlap = i64::MAX;
    let mut min_area = i64::MAX;

    for index in min_entries..=(total - min_entries) {
        let bbox1 = Envelope::of(&children[..index]);
        let bbox2 = Envelope::of(&children[index..]);
        let overlap = bbox1.intersection_area(&bbox2);
        let area = bbox1.area() + bbox2.area();

        if overlap < min_overlap {
            min_overlap = overlap;
            best_index = index;
            if area < min_area {
                min_area = area;
            }
        } else if overlap == min_overlap && area < min_area {
            min_area = area;
            best_index = index;
        }
    }

    best_index
}

/// Total margin over all legal (left, right) distributions of a child
/// list sorted by `key`. Leaves the list sorted by `key`.
fn all_dist_margin<T>(children: &mut [Node<T>], min_entries: usize, key: fn(&Node<T>) -> i64) -> i64 {
    children.sort_by_key(key);
    let total = children.len();

    let mut left = Envelope::of(&children[..min_entries]);
    let mut right = Envelope::of(&children[total - min_entries..]);
    let mut margin = left.margin() + right.margin();

    for child in &children[min_entries..total - min_entries] {
        left.extend(&child.envelope);
        margin += left.margin();
    }
    for child in children[min_entries..total - min_entries].iter().rev() {
        right.extend(&child.envelope);
        margin += right.margin();
    }

    margin
}

fn x_min_key<T>(node: &Node<T>) -> i64 {
    node.envelope.x_min
}

fn y_min_key<T>(node: &Node<T>) -> i64 {
    node.envelope.y_min
}
