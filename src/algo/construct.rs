/*!
 * Construction of sort orders from rankings.
 *
 * A ranking lists element indices in the order they would ideally be placed. One ranking is
 * turned into an order directly. Several rankings (one per reference point) are interleaved round
 * robin: the `i`th placed element comes from ranking `i mod M`, skipping elements another ranking
 * already placed.
 *
 * With connected first ordering each ranking drives a breadth first walk. The walk prefers
 * unplaced elements that were discovered as neighbours of its earlier picks, in increasing order
 * of discovery level, and breaks ties by ranking position.
 */

use std::cmp::Reverse;
use std::collections::BinaryHeap;

use crate::index::Index;
use crate::order::SortOrder;

/// Discovery state of a connected first walk.
#[derive(Clone, Debug)]
struct Frontier {
    /// Position of each element in the walk's ranking.
    position: Vec<usize>,
    /// Level at which each element was discovered. Zero means undiscovered.
    discovered: Vec<usize>,
    /// The level currently being placed.
    level: usize,
    /// Ranking positions of elements discovered at `level` and `level + 1`.
    ///
    /// Entries are removed lazily once their element is placed.
    open: [BinaryHeap<Reverse<usize>>; 2],
}

impl Frontier {
    fn new(ranking: &[usize]) -> Self {
        let mut position = vec![0; ranking.len()];
        for (pos, &elem) in ranking.iter().enumerate() {
            position[elem] = pos;
        }
        Frontier {
            position,
            discovered: vec![0; ranking.len()],
            level: 1,
            open: [BinaryHeap::new(), BinaryHeap::new()],
        }
    }

    /// Lowest ranking position of an unplaced element discovered at the current level.
    fn peek_open(&mut self, ranking: &[usize], used: &[bool]) -> Option<usize> {
        let open = &mut self.open[0];
        while let Some(&Reverse(pos)) = open.peek() {
            if !used[ranking[pos]] {
                return Some(pos);
            }
            open.pop();
        }
        None
    }

    /// Move on to the next level. Elements left at the current level are only reachable through
    /// the ranking from now on.
    fn advance(&mut self) {
        self.level += 1;
        let next = std::mem::take(&mut self.open[1]);
        self.open = [next, BinaryHeap::new()];
    }

    /// Record the unplaced, undiscovered elements in `neighbours` at the given level.
    fn discover(&mut self, neighbours: &[usize], level: usize, used: &[bool]) {
        let slot = level - self.level;
        for &n in neighbours {
            if self.discovered[n] == 0 {
                self.discovered[n] = level;
                if !used[n] {
                    self.open[slot].push(Reverse(self.position[n]));
                }
            }
        }
    }
}

/// A cursor over one ranking.
#[derive(Clone, Debug)]
struct Walk<'a> {
    ranking: &'a [usize],
    /// All elements before this ranking position are placed.
    head: usize,
    frontier: Option<Frontier>,
    started: bool,
}

impl<'a> Walk<'a> {
    fn new(ranking: &'a [usize], connected: bool) -> Self {
        Walk {
            ranking,
            head: 0,
            frontier: connected.then(|| Frontier::new(ranking)),
            started: false,
        }
    }

    /// Ranking position of the first unplaced element.
    fn first_unused(&mut self, used: &[bool]) -> Option<usize> {
        while self.head < self.ranking.len() && used[self.ranking[self.head]] {
            self.head += 1;
        }
        if self.head < self.ranking.len() {
            Some(self.head)
        } else {
            None
        }
    }

    /// Pick the next element to place.
    ///
    /// `neighbours` fills the given buffer with the neighbours of an element.
    fn next<F>(&mut self, used: &[bool], buf: &mut Vec<usize>, neighbours: &mut F) -> Option<usize>
    where
        F: FnMut(usize, &mut Vec<usize>),
    {
        let ranking = self.ranking;
        let frontier = match self.frontier.as_mut() {
            None => return self.first_unused(used).map(|pos| ranking[pos]),
            Some(frontier) => frontier,
        };

        let seed = !self.started;
        self.started = true;

        let found = if seed {
            None
        } else {
            frontier.peek_open(ranking, used).or_else(|| {
                frontier.advance();
                frontier.peek_open(ranking, used)
            })
        };

        let pos = match found {
            Some(pos) => pos,
            None => self.first_unused(used)?,
        };
        let elem = ranking[pos];

        // Seed neighbours land on the first level, every later discovery one level further.
        let frontier = self.frontier.as_mut()?;
        let level = if seed {
            frontier.level
        } else {
            frontier.level + 1
        };
        buf.clear();
        neighbours(elem, buf);
        frontier.discover(buf, level, used);
        Some(elem)
    }
}

fn interleave<F>(
    num_elements: usize,
    rankings: &[Vec<usize>],
    connected: bool,
    mut neighbours: F,
) -> SortOrder
where
    F: FnMut(usize, &mut Vec<usize>),
{
    debug_assert!(rankings.iter().all(|r| r.len() == num_elements));
    if rankings.is_empty() {
        return SortOrder::identity(num_elements);
    }

    let mut walks: Vec<_> = rankings
        .iter()
        .map(|ranking| Walk::new(ranking, connected))
        .collect();
    let mut used = vec![false; num_elements];
    let mut slots = vec![Index::INVALID; num_elements];
    let mut buf = Vec::new();

    let num_walks = walks.len();
    for rank in 0..num_elements {
        let walk = &mut walks[rank % num_walks];
        let elem = match walk.next(&used, &mut buf, &mut neighbours) {
            Some(elem) => elem,
            // Only reachable if a ranking is not a permutation.
            None => break,
        };
        used[elem] = true;
        slots[elem] = Index::new(rank);
    }

    SortOrder::from_slots(slots)
}

/// Build an order by placing elements as listed in the rankings, interleaving several rankings
/// round robin.
///
/// Each ranking must be a permutation of `0..num_elements`. With no rankings the identity order
/// is returned.
pub fn plain_order(num_elements: usize, rankings: &[Vec<usize>]) -> SortOrder {
    interleave(num_elements, rankings, false, |_, _| {})
}

/// Build an order that keeps topologically close elements close together.
///
/// `neighbours(elem, buf)` must push the neighbours of `elem` onto `buf`. Duplicates are allowed.
/// See the module documentation for how picks are made.
pub fn connected_order<F>(num_elements: usize, rankings: &[Vec<usize>], neighbours: F) -> SortOrder
where
    F: FnMut(usize, &mut Vec<usize>),
{
    interleave(num_elements, rankings, true, neighbours)
}
