use std::cmp::Ordering;
use std::mem;

use crate::node::Node;
use crate::rtree::RTree;
use crate::utils::{ceil_log, ceil_sqrt, divup};
use crate::Envelope;

impl<T> RTree<T> {
    /// Bulk-load items with the OMT packing and merge the result into
    /// the tree. Fewer than `min_entries` items fall back to one-by-one
    /// insertion.
    pub fn load<I>(&mut self, items: I)
    where
        I: IntoIterator<Item = (T, Envelope)>,
    {
        let entries: Vec<Node<T>> = items
            .into_iter()
            .map(|(payload, envelope)| Node::entry(payload, envelope))
            .collect();
        if entries.is_empty() {
            return;
        }

        if entries.len() < self.min_entries {
            for entry in entries {
                let target_level = self.root.height - 1;
                self.insert_node(entry, target_level);
                self.size += 1;
            }
            return;
        }

        self.size += entries.len();
        let mut built = self.build_one_level(entries, 0);

        if self.root.children.is_empty() {
            self.root = built;
        } else if self.root.height == built.height {
            // Equal heights: the two trees become siblings under a new root.
            self.grow_root(built);
        } else {
            if self.root.height < built.height {
                mem::swap(&mut self.root, &mut built);
            }
            // Insert the smaller tree as a node of the larger one.
            let target_level = self.root.height - built.height - 1;
            self.insert_node(built, target_level);
        }
    }

    /// OMT: partition into vertical stripes by X1 and each stripe into
    /// tiles by Y1, recursing per tile. `height == 0` marks the top
    /// call, where the target height and root fanout are computed.
    fn build_one_level(&self, mut items: Vec<Node<T>>, height: usize) -> Node<T> {
        let num_items = items.len();
        let mut fanout = self.max_entries;

        if num_items <= fanout {
            let mut leaf = Node::leaf(items);
            leaf.refresh_envelope();
            return leaf;
        }

        let height = if height == 0 {
            let target = ceil_log(fanout, num_items);
            // Balance the root fanout against the subtree capacity.
            fanout = divup(num_items, fanout.pow(target as u32 - 1));
            target
        } else {
            height
        };

        let tile_size = divup(num_items, fanout);
        let stripe_size = tile_size * ceil_sqrt(fanout);

        partition_to_chunks(stripe_size, &mut items, cmp_x_min);

        let mut tile_sizes = Vec::new();
        let mut start = 0;
        while start < num_items {
            let stripe_end = num_items.min(start + stripe_size);
            partition_to_chunks(tile_size, &mut items[start..stripe_end], cmp_y_min);
            let mut tile_start = start;
            while tile_start < stripe_end {
                let tile_end = stripe_end.min(tile_start + tile_size);
                tile_sizes.push(tile_end - tile_start);
                tile_start = tile_end;
            }
            start = stripe_end;
        }

        let mut children = Vec::with_capacity(tile_sizes.len());
        let mut remaining = items.into_iter();
        for size in tile_sizes {
            let tile: Vec<Node<T>> = remaining.by_ref().take(size).collect();
            children.push(self.build_one_level(tile, height - 1));
        }

        let mut node = Node::internal(children, height);
        node.refresh_envelope();
        node
    }
}

fn cmp_x_min<T>(a: &Node<T>, b: &Node<T>) -> Ordering {
    a.envelope.x_min.cmp(&b.envelope.x_min)
}

fn cmp_y_min<T>(a: &Node<T>, b: &Node<T>) -> Ordering {
    a.envelope.y_min.cmp(&b.envelope.y_min)
}

/// Partially sort `entries` so that every `chunk_size`-aligned boundary
/// splits the slice as a full sort would, without ordering inside the
/// chunks. Ported from the rbush multi-select.
fn partition_to_chunks<T>(
    chunk_size: usize,
    entries: &mut [Node<T>],
    cmp: fn(&Node<T>, &Node<T>) -> Ordering,
) {
    let mut stack = vec![0, entries.len()];

    while !stack.is_empty() {
        let high = stack.pop().unwrap();
        let low = stack.pop().unwrap();
        if (high - low) <= chunk_size {
            continue;
        }

        let mid = low + chunk_size * divup(high - low, 2 * chunk_size);
        order_stat::kth_by(&mut entries[low..high], mid - low, cmp);

        stack.extend(vec![low, mid, mid, high]);
    }
}
