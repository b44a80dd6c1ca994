//! Partial routes for the savings algorithm.
//!
//! Every delivery starts as its own chain. Chains are addressed by a route
//! id (the index of the delivery they started from) and merged end-to-end.
//! Ownership of a delivery is resolved through a union-find over route ids
//! with path compression, so merging never rewrites per-delivery owners.
//!
//! Chain links are stored without direction: each delivery keeps up to two
//! neighbours. A chain is oriented only by its `head` and `tail`, which
//! makes reversing a chain a swap of its two ends.

use crate::models::{Delivery, Load};

/// Where a delivery sits in its chain.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) struct Ends {
    pub head: bool,
    pub tail: bool,
}

#[derive(Debug, Clone, Copy)]
struct SubRoute {
    head: usize,
    tail: usize,
    load: Load,
}

/// Arena of chains under construction, indexed by delivery position.
#[derive(Debug)]
pub(super) struct SubRoutes {
    routes: Vec<SubRoute>,
    parent: Vec<usize>,
    links: Vec<[Option<usize>; 2]>,
}

impl SubRoutes {
    /// One singleton chain per delivery.
    pub fn singletons(deliveries: &[Delivery]) -> Self {
        let n = deliveries.len();
        Self {
            routes: deliveries
                .iter()
                .enumerate()
                .map(|(i, d)| SubRoute {
                    head: i,
                    tail: i,
                    load: Load::single(d),
                })
                .collect(),
            parent: (0..n).collect(),
            links: vec![[None, None]; n],
        }
    }

    /// Route id currently owning `delivery`.
    pub fn owner(&mut self, delivery: usize) -> usize {
        let mut root = delivery;
        while self.parent[root] != root {
            root = self.parent[root];
        }
        let mut node = delivery;
        while self.parent[node] != root {
            let next = self.parent[node];
            self.parent[node] = root;
            node = next;
        }
        root
    }

    /// Aggregate load of a live route.
    pub fn load(&self, route: usize) -> Load {
        self.routes[route].load
    }

    /// Whether `delivery` is the head and/or tail of `route`.
    pub fn ends(&self, route: usize, delivery: usize) -> Ends {
        let r = &self.routes[route];
        Ends {
            head: r.head == delivery,
            tail: r.tail == delivery,
        }
    }

    /// Flips the orientation of a live route.
    pub fn reverse(&mut self, route: usize) {
        let r = &mut self.routes[route];
        std::mem::swap(&mut r.head, &mut r.tail);
    }

    /// Appends `back` after `front`: links the tail of `front` to the head
    /// of `back`. `front` survives and `back` is absorbed into it.
    pub fn join(&mut self, front: usize, back: usize) -> usize {
        let (tail, head) = (self.routes[front].tail, self.routes[back].head);
        self.link(tail, head);
        self.link(head, tail);

        let absorbed = self.routes[back];
        let survivor = &mut self.routes[front];
        survivor.tail = absorbed.tail;
        survivor.load = survivor.load.merge(&absorbed.load);
        self.parent[back] = front;
        front
    }

    /// Ids of routes that have not been absorbed, in creation order.
    pub fn live(&self) -> impl Iterator<Item = usize> + '_ {
        (0..self.routes.len()).filter(|&r| self.parent[r] == r)
    }

    /// Delivery positions of a live route from head to tail.
    pub fn members(&self, route: usize) -> Vec<usize> {
        let r = &self.routes[route];
        let mut out = Vec::with_capacity(r.load.stops());
        let mut prev = None;
        let mut current = Some(r.head);
        while let Some(node) = current {
            out.push(node);
            let next = self.links[node]
                .iter()
                .flatten()
                .copied()
                .find(|&n| Some(n) != prev);
            prev = Some(node);
            current = next;
        }
        out
    }

    fn link(&mut self, from: usize, to: usize) {
        let slots = &mut self.links[from];
        if slots[0].is_none() {
            slots[0] = Some(to);
        } else {
            slots[1] = Some(to);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constructive::testing::stop;

    fn arena(n: u32) -> SubRoutes {
        let deliveries: Vec<Delivery> = (0..n).map(|k| stop(k + 1, 1.0, 0.1)).collect();
        SubRoutes::singletons(&deliveries)
    }

    #[test]
    fn test_singletons() {
        let mut s = arena(3);
        assert_eq!(s.live().collect::<Vec<_>>(), vec![0, 1, 2]);
        assert_eq!(s.owner(2), 2);
        assert_eq!(s.members(1), vec![1]);
        assert_eq!(s.ends(1, 1), Ends { head: true, tail: true });
        assert_eq!(s.load(0).stops(), 1);
    }

    #[test]
    fn test_join_and_owner() {
        let mut s = arena(4);
        assert_eq!(s.join(0, 1), 0);
        assert_eq!(s.join(2, 3), 2);
        let survivor = s.join(0, 2);
        assert_eq!(survivor, 0);
        assert_eq!(s.members(0), vec![0, 1, 2, 3]);
        for d in 0..4 {
            assert_eq!(s.owner(d), 0);
        }
        assert_eq!(s.live().collect::<Vec<_>>(), vec![0]);
        assert_eq!(s.load(0).stops(), 4);
        assert_eq!(s.load(0).weight_kg(), 4.0);
    }

    #[test]
    fn test_reverse_then_join() {
        let mut s = arena(4);
        s.join(0, 1); // [0, 1]
        s.join(2, 3); // [2, 3]
        s.reverse(2); // [3, 2]
        s.join(0, 2);
        assert_eq!(s.members(0), vec![0, 1, 3, 2]);
        s.reverse(0);
        assert_eq!(s.members(0), vec![2, 3, 1, 0]);
        assert_eq!(s.ends(0, 2), Ends { head: true, tail: false });
        assert_eq!(s.ends(0, 0), Ends { head: false, tail: true });
        assert_eq!(s.ends(0, 3), Ends { head: false, tail: false });
    }
}
