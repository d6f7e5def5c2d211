//! Enumeration of the partitions of a collection into exactly `k` blocks.
//!
//! This is Knuth's revolving-door traversal of the restricted growth strings
//! with exactly `k` distinct values (TAoCP 7.2.1.5, exercise 17). It is made
//! of two mutually recursive sweeps, a forward one `f` and a backward one `b`,
//! which together visit every such string exactly once. Here the recursion is
//! an explicit stack of frames, each remembering where to resume, so the
//! partitions come out one at a time and the visit order is that of the
//! recursive formulation.

use crate::count::stirling2;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Sweep {
    Forward,
    Backward,
}

// Resume points inside the two sweeps.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Resume {
    Start,
    ForwardTail,
    ForwardCountdown,
    ForwardRecurse,
    BackwardCountup,
    BackwardCountupStep,
    BackwardResetMu,
    BackwardRecurse,
    BackwardTail,
    Finished,
}

#[derive(Debug, Clone)]
struct Frame {
    sweep: Sweep,
    mu: usize,
    nu: usize,
    sigma: usize,
    pc: Resume,
}

impl Frame {
    fn new(sweep: Sweep, mu: usize, nu: usize, sigma: usize) -> Self {
        Frame { sweep, mu, nu, sigma, pc: Resume::Start }
    }

    // sweep of the inner call over nu - 1, chosen by the parity of a[nu]
    fn inner(&self, a: &[usize], odd: Sweep, even: Sweep) -> Frame {
        let sweep = if (a[self.nu] + self.sigma) % 2 == 1 { odd } else { even };
        Frame::new(sweep, self.mu, self.nu - 1, 0)
    }
}

enum Step {
    Visit,
    Call(Frame),
    Return,
    Continue,
}

fn step(frame: &mut Frame, a: &mut [usize]) -> Step {
    use Resume::*;
    use Sweep::*;

    let (mu, nu, sigma) = (frame.mu, frame.nu, frame.sigma);
    match (frame.sweep, frame.pc) {
        (Forward, Start) => {
            frame.pc = ForwardTail;
            if mu == 2 {
                Step::Visit
            } else {
                Step::Call(Frame::new(Forward, mu - 1, nu - 1, (mu + sigma) % 2))
            }
        }
        (Forward, ForwardTail) => {
            if nu == mu + 1 {
                a[mu] = mu - 1;
                frame.pc = ForwardCountdown;
                Step::Visit
            } else if nu > mu + 1 {
                if (mu + sigma) % 2 == 1 {
                    a[nu - 1] = mu - 1;
                } else {
                    a[mu] = mu - 1;
                }
                frame.pc = ForwardRecurse;
                Step::Call(frame.inner(a, Backward, Forward))
            } else {
                Step::Return
            }
        }
        (Forward, ForwardCountdown) => {
            if a[nu] > 0 {
                a[nu] -= 1;
                Step::Visit
            } else {
                Step::Return
            }
        }
        (Forward, ForwardRecurse) => {
            if a[nu] > 0 {
                a[nu] -= 1;
                Step::Call(frame.inner(a, Backward, Forward))
            } else {
                Step::Return
            }
        }
        (Backward, Start) => {
            if nu == mu + 1 {
                frame.pc = BackwardCountup;
                Step::Continue
            } else if nu > mu + 1 {
                frame.pc = BackwardRecurse;
                Step::Call(frame.inner(a, Forward, Backward))
            } else {
                frame.pc = BackwardTail;
                Step::Continue
            }
        }
        (Backward, BackwardCountup) => {
            frame.pc = if a[nu] < mu - 1 { BackwardCountupStep } else { BackwardResetMu };
            Step::Visit
        }
        (Backward, BackwardCountupStep) => {
            a[nu] += 1;
            frame.pc = BackwardCountup;
            Step::Continue
        }
        (Backward, BackwardResetMu) => {
            a[mu] = 0;
            frame.pc = BackwardTail;
            Step::Continue
        }
        (Backward, BackwardRecurse) => {
            if a[nu] < mu - 1 {
                a[nu] += 1;
                Step::Call(frame.inner(a, Forward, Backward))
            } else {
                if (mu + sigma) % 2 == 1 {
                    a[nu - 1] = 0;
                } else {
                    a[mu] = 0;
                }
                frame.pc = BackwardTail;
                Step::Continue
            }
        }
        (Backward, BackwardTail) => {
            frame.pc = Finished;
            if mu == 2 {
                Step::Visit
            } else {
                Step::Call(Frame::new(Backward, mu - 1, nu - 1, (mu + sigma) % 2))
            }
        }
        (_, Finished) => Step::Return,
        (sweep, pc) => unreachable!("{:?} sweep has no resume point {:?}", sweep, pc),
    }
}

/// Lazily enumerates the partitions of a collection into exactly `k`
/// non-empty blocks.
#[derive(Debug, Clone)]
pub struct KPartitions<T> {
    collection: Vec<T>,
    k: usize,
    // a[1..=n] is the block of each element; a[0] is unused
    a: Vec<usize>,
    stack: Vec<Frame>,
    // result of the special cases that need no sweep
    single: Option<Vec<Vec<T>>>,
    remaining: Option<usize>,
}

/// Generate all `k`-block partitions of a collection.
///
/// Yields nothing for an empty collection, `k == 0` or `k` larger than the
/// collection.
///
/// ```
/// use causal_partitions::k_partitions;
///
/// let parts: Vec<_> = k_partitions(vec![0, 1, 2], 2).collect();
/// assert_eq!(parts, vec![
///     vec![vec![0, 1], vec![2]],
///     vec![vec![0], vec![1, 2]],
///     vec![vec![0, 2], vec![1]],
/// ]);
/// ```
pub fn k_partitions<T: Clone>(collection: Vec<T>, k: usize) -> KPartitions<T> {
    KPartitions::new(collection, k)
}

impl<T: Clone> KPartitions<T> {
    /// Set up the enumeration.
    pub fn new(collection: Vec<T>, k: usize) -> Self {
        let n = collection.len();
        let mut sp = KPartitions {
            k,
            a: Vec::new(),
            stack: Vec::new(),
            single: None,
            remaining: stirling2::<usize>(n, k),
            collection,
        };

        if n == 0 || k < 1 || k > n {
            sp.remaining = Some(0);
        } else if k == 1 {
            sp.single = Some(vec![sp.collection.clone()]);
        } else if k == n {
            sp.single = Some(sp.collection.iter().map(|x| vec![x.clone()]).collect());
        } else {
            sp.a = vec![0; n + 1];
            for j in 1..=k {
                sp.a[n - k + j] = j - 1;
            }
            sp.stack.push(Frame::new(Sweep::Forward, k, n, 0));
        }
        sp
    }

    /// Number of blocks in every partition produced.
    pub fn k(&self) -> usize {
        self.k
    }

    /// The current restricted growth string, one block index per element.
    pub fn get(&self) -> &[usize] {
        self.a.get(1..).unwrap_or(&[])
    }

    fn visit(&self) -> Vec<Vec<T>> {
        let mut blocks = vec![Vec::new(); self.k];
        for (x, block) in self.collection.iter().zip(&self.a[1..]) {
            blocks[*block].push(x.clone());
        }
        blocks
    }
}

impl<T: Clone> Iterator for KPartitions<T> {
    type Item = Vec<Vec<T>>;

    fn next(&mut self) -> Option<Vec<Vec<T>>> {
        let item = if let Some(single) = self.single.take() {
            Some(single)
        } else {
            loop {
                let frame = match self.stack.last_mut() {
                    Some(frame) => frame,
                    None => break None,
                };
                match step(frame, &mut self.a) {
                    Step::Visit => break Some(self.visit()),
                    Step::Call(inner) => self.stack.push(inner),
                    Step::Return => {
                        self.stack.pop();
                    }
                    Step::Continue => {}
                }
            }
        };
        if item.is_some() {
            self.remaining = self.remaining.map(|r| r.saturating_sub(1));
        }
        item
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match self.remaining {
            Some(r) => (r, Some(r)),
            None => (0, None),
        }
    }
}
