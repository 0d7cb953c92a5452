// src/diff.rs
//
// Line-level alignment of old vs. current label text for the split view.
// Common prefix/suffix are peeled off first; the middle is aligned with an
// LCS table unless it would exceed DIFF_DP_WORK_LIMIT cells, in which case
// lines are paired by position. Removed/added runs sitting in the same gap
// are paired into `Changed` rows so both columns stay level.

use crate::config::consts::DIFF_DP_WORK_LIMIT;
use crate::core::sanitize::text_lines;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LineKind {
    Same,
    Removed,
    Added,
    Changed,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Line {
    /// 1-based line number in its own text
    pub no: usize,
    pub text: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DiffRow {
    pub kind: LineKind,
    pub left: Option<Line>,
    pub right: Option<Line>,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DiffStats {
    pub removed: usize,
    pub added: usize,
    pub changed: usize,
}

impl DiffStats {
    pub fn is_identical(&self) -> bool { self.removed == 0 && self.added == 0 && self.changed == 0 }
}

#[derive(Clone, Copy)]
enum Op {
    Keep(usize, usize),
    Del(usize),
    Ins(usize),
}

pub fn diff_lines(old: &str, new: &str) -> Vec<DiffRow> {
    let a = text_lines(old);
    let b = text_lines(new);

    let prefix = a.iter().zip(&b).take_while(|(x, y)| x == y).count();
    let suffix = a[prefix..]
        .iter()
        .rev()
        .zip(b[prefix..].iter().rev())
        .take_while(|(x, y)| x == y)
        .count();

    let mut ops: Vec<Op> = (0..prefix).map(|i| Op::Keep(i, i)).collect();

    let (a_mid, b_mid) = (prefix..a.len() - suffix, prefix..b.len() - suffix);
    let m = a_mid.len();
    let n = b_mid.len();
    if m.saturating_mul(n) <= DIFF_DP_WORK_LIMIT {
        align_lcs(&a[a_mid.clone()], &b[b_mid.clone()], prefix, prefix, &mut ops);
    } else {
        logd!("Diff: {m}x{n} exceeds work limit, pairing by position");
        align_positional(m, n, prefix, prefix, &mut ops);
    }

    let (a_tail, b_tail) = (a.len() - suffix, b.len() - suffix);
    ops.extend((0..suffix).map(|k| Op::Keep(a_tail + k, b_tail + k)));

    build_rows(&ops, &a, &b)
}

pub fn stats(rows: &[DiffRow]) -> DiffStats {
    let mut s = DiffStats::default();
    for r in rows {
        match r.kind {
            LineKind::Same => {}
            LineKind::Removed => s.removed += 1,
            LineKind::Added => s.added += 1,
            LineKind::Changed => s.changed += 1,
        }
    }
    s
}

fn align_lcs(a: &[&str], b: &[&str], a_off: usize, b_off: usize, ops: &mut Vec<Op>) {
    let m = a.len();
    let n = b.len();
    let w = n + 1;

    // dp[i][j] = LCS length of a[i..], b[j..]
    let mut dp = vec![0u32; (m + 1) * w];
    for i in (0..m).rev() {
        for j in (0..n).rev() {
            dp[i * w + j] = if a[i] == b[j] {
                dp[(i + 1) * w + j + 1] + 1
            } else {
                dp[(i + 1) * w + j].max(dp[i * w + j + 1])
            };
        }
    }

    let (mut i, mut j) = (0usize, 0usize);
    while i < m && j < n {
        if a[i] == b[j] {
            ops.push(Op::Keep(a_off + i, b_off + j));
            i += 1;
            j += 1;
        } else if dp[(i + 1) * w + j] >= dp[i * w + j + 1] {
            ops.push(Op::Del(a_off + i));
            i += 1;
        } else {
            ops.push(Op::Ins(b_off + j));
            j += 1;
        }
    }
    ops.extend((i..m).map(|k| Op::Del(a_off + k)));
    ops.extend((j..n).map(|k| Op::Ins(b_off + k)));
}

fn align_positional(m: usize, n: usize, a_off: usize, b_off: usize, ops: &mut Vec<Op>) {
    // every pair becomes Changed in build_rows
    for k in 0..m.max(n) {
        if k < m { ops.push(Op::Del(a_off + k)); }
        if k < n { ops.push(Op::Ins(b_off + k)); }
    }
}

fn build_rows(ops: &[Op], a: &[&str], b: &[&str]) -> Vec<DiffRow> {
    let line = |lines: &[&str], ix: usize| Line { no: ix + 1, text: s!(lines[ix]) };

    let mut rows = Vec::with_capacity(ops.len());
    let mut dels: Vec<usize> = Vec::new();
    let mut ins: Vec<usize> = Vec::new();

    let flush = |dels: &mut Vec<usize>, ins: &mut Vec<usize>, rows: &mut Vec<DiffRow>| {
        for k in 0..dels.len().max(ins.len()) {
            let left = dels.get(k).map(|&ix| line(a, ix));
            let right = ins.get(k).map(|&ix| line(b, ix));
            let kind = match (&left, &right) {
                (Some(_), Some(_)) => LineKind::Changed,
                (Some(_), None) => LineKind::Removed,
                _ => LineKind::Added,
            };
            rows.push(DiffRow { kind, left, right });
        }
        dels.clear();
        ins.clear();
    };

    for op in ops {
        match *op {
            Op::Del(i) => dels.push(i),
            Op::Ins(j) => ins.push(j),
            Op::Keep(i, j) => {
                flush(&mut dels, &mut ins, &mut rows);
                rows.push(DiffRow { kind: LineKind::Same, left: Some(line(a, i)), right: Some(line(b, j)) });
            }
        }
    }
    flush(&mut dels, &mut ins, &mut rows);
    rows
}
