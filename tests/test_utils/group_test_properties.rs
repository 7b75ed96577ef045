use fuzzy_overlay::AABB;
use fuzzy_overlay::core::traits::FuzzyEq;
use fuzzy_overlay::geom::RingGroup;

/// Fuzzy compare AABB values.
pub fn aabb_fuzzy_eq_eps(a: &AABB<f64>, b: &AABB<f64>, eps: f64) -> bool {
    a.min_x.fuzzy_eq_eps(b.min_x, eps)
        && a.min_y.fuzzy_eq_eps(b.min_y, eps)
        && a.max_x.fuzzy_eq_eps(b.max_x, eps)
        && a.max_y.fuzzy_eq_eps(b.max_y, eps)
}

/// Holds a set of properties of a result polygon for comparison in tests.
#[derive(Debug, Copy, Clone)]
pub struct GroupProperties {
    pub ring_count: usize,
    pub area: f64,
    pub extents: AABB<f64>,
}

impl GroupProperties {
    // property comparer epsilon
    pub const PROP_CMP_EPS: f64 = 1e-4;

    pub fn new(ring_count: usize, area: f64, min_x: f64, min_y: f64, max_x: f64, max_y: f64) -> Self {
        Self {
            ring_count,
            area,
            extents: AABB::new(min_x, min_y, max_x, max_y),
        }
    }

    pub fn from_group(group: &RingGroup<f64>) -> Self {
        Self {
            ring_count: group.ring_count(),
            area: group.area(),
            extents: group.extents().expect("result polygon must not be empty"),
        }
    }

    pub fn fuzzy_eq_eps(&self, other: &Self, eps: f64) -> bool {
        self.ring_count == other.ring_count
            && self.area.fuzzy_eq_eps(other.area, eps)
            && aabb_fuzzy_eq_eps(&self.extents, &other.extents, eps)
    }
}

pub fn create_property_set(groups: &[RingGroup<f64>]) -> Vec<GroupProperties> {
    groups.iter().map(GroupProperties::from_group).collect()
}

/// Compare result against expected without requiring the same ordering.
pub fn property_sets_match(
    result_set: &[GroupProperties],
    expected_set: &[GroupProperties],
) -> bool {
    if result_set.len() != expected_set.len() {
        return false;
    }

    let mut used = vec![false; result_set.len()];
    for expected in expected_set {
        let found = result_set.iter().enumerate().position(|(i, r)| {
            !used[i] && r.fuzzy_eq_eps(expected, GroupProperties::PROP_CMP_EPS)
        });
        match found {
            Some(i) => used[i] = true,
            None => return false,
        }
    }
    true
}
