#![no_main]
use std::cell::RefCell;

use arbitrary::Arbitrary;
use jsontree::{ParserOptions, Value, parse_with_options};
use libfuzzer_sys::{fuzz_mutator, fuzz_target, fuzzer_mutate};
use rand::rngs::SmallRng;
use rand::{Rng, RngCore, SeedableRng};
use serde_json::Map;

const HEADER: usize = 1; // option flags

/// Deep enough for anything `serde_json` accepts (its limit is 128).
const MAX_DEPTH: usize = 256;

thread_local! {
    static RNG: RefCell<SmallRng> =
        RefCell::new(SmallRng::from_os_rng());
}

// JSON whitespace, plus a few code points that look like whitespace but
// must be rejected.
static WS_TABLE: &[&[u8]] = &[
    b" ",
    b"\t",
    b"\n",
    b"\r",
    "\u{00A0}".as_bytes(),
    "\u{2028}".as_bytes(),
    "\u{3000}".as_bytes(),
];

fn with_rng<F, R>(f: F) -> R
where
    F: FnOnce(&mut SmallRng) -> R,
{
    RNG.with(|cell| f(&mut cell.borrow_mut()))
}

fn mutator(data: &mut [u8], size: usize, max_size: usize, seed: u32) -> usize {
    if size < HEADER || seed.is_multiple_of(10) {
        data[0] = with_rng(|rng| rng.next_u32() as u8);

        let mut prefix = HEADER;
        while prefix < size.max(HEADER + 1) && prefix < max_size {
            let limit = max_size - prefix;

            prefix += append_whitespace(&mut data[prefix..], limit);
            let limit = max_size - prefix;
            prefix += append_value(&mut data[prefix..], size.max(2), limit);
            let limit = max_size - prefix;
            prefix += append_whitespace(&mut data[prefix..], limit);
        }

        prefix
    } else {
        fuzzer_mutate(data, size, max_size)
    }
}

/// Writes up to eight whitespace code points into `buf` without exceeding
/// `limit` bytes. Returns the number of bytes written.
fn append_whitespace(buf: &mut [u8], limit: usize) -> usize {
    with_rng(|rng| {
        if limit == 0 {
            return 0;
        }

        let n_codepoints = rng.random_range(1..=limit.min(8));
        let mut written = 0;
        for _ in 0..n_codepoints {
            // Mostly JSON whitespace; the rest is there to hit rejections.
            let w = if rng.random_ratio(15, 16) {
                WS_TABLE[rng.random_range(0..4)]
            } else {
                WS_TABLE[rng.random_range(0..WS_TABLE.len())]
            };
            if written + w.len() > limit {
                break;
            }
            buf[written..written + w.len()].copy_from_slice(w);
            written += w.len();
        }
        written
    })
}

fn append_value(data: &mut [u8], size: usize, limit: usize) -> usize {
    let value = loop {
        let s = with_rng(|rng| rng.random_range(size / 2..size * 2).min(limit));
        let bytes: Vec<u8> = with_rng(|rng| (0..s).map(|_| rng.random::<u8>()).collect());
        if let Ok(value) = ArbitraryValue::arbitrary(&mut arbitrary::Unstructured::new(&bytes)) {
            break value;
        }
    };

    let serialized = serde_json::to_vec(&value.0).expect("Failed to serialize arbitrary value");

    let len = serialized.len().min(limit);
    data[..len].copy_from_slice(&serialized[..len]);

    len
}

fuzz_mutator!(|data: &mut [u8], size: usize, max_size: usize, seed: u32| {
    mutator(data, size, max_size, seed)
});

#[derive(Debug)]
struct ArbitraryValue(serde_json::Value);

impl<'a> Arbitrary<'a> for ArbitraryValue {
    fn arbitrary(u: &mut arbitrary::Unstructured<'_>) -> arbitrary::Result<Self> {
        use serde_json::Value as J;

        let value = match u.choose_index(21)? {
            0 => J::Null,
            1 => J::Bool(u.arbitrary()?),
            2 => {
                let n: f64 = u.arbitrary()?;
                J::Number(
                    serde_json::Number::from_f64(n).ok_or(arbitrary::Error::IncorrectFormat)?,
                )
            }
            3..=10 => J::String(u.arbitrary()?),
            11..=15 => {
                let elems: Vec<ArbitraryValue> = u.arbitrary()?;
                J::Array(elems.into_iter().map(|v| v.0).collect())
            }
            16..=20 => {
                let m: Vec<(String, ArbitraryValue)> = u.arbitrary()?;
                J::Object(Map::from_iter(m.into_iter().map(|(k, v)| (k, v.0))))
            }
            _ => Err(arbitrary::Error::IncorrectFormat)?,
        };
        Ok(ArbitraryValue(value))
    }
}

fn options(flags: u8) -> ParserOptions {
    ParserOptions {
        excerpt_len: usize::from(flags & 0x3F),
        max_depth: if flags & 0x40 != 0 {
            Some(usize::from(flags >> 7) * 4)
        } else {
            Some(MAX_DEPTH)
        },
    }
}

fn reparse(value: &Value) -> Value {
    parse_with_options(value.to_string(), options(0)).expect("serialized tree must parse")
}

fn parser(data: &[u8]) {
    let Some((&flags, input)) = data.split_first() else {
        return;
    };
    let options = options(flags);

    let parsed = parse_with_options(input, options);

    if let Err(e) = &parsed {
        assert!(e.excerpt.chars().count() <= options.excerpt_len);
        assert!(e.offset <= input.len());
        assert!(e.line >= 1 && e.column >= 1);
        if options.excerpt_len > 0 && !input.is_empty() {
            assert!(!e.excerpt.is_empty());
        }
    }

    if options.max_depth == Some(MAX_DEPTH)
        && serde_json::from_slice::<serde_json::Value>(input).is_ok()
    {
        assert!(parsed.is_ok(), "rejected input serde_json accepts: {parsed:?}");
    }

    // Writing a tree out and reading it back reaches a fixed point after one
    // step. The first step may differ from the input tree: non-finite
    // numbers become `null` and raw control characters come back as `\u`
    // text.
    if let Ok(first) = parsed {
        let second = reparse(&first);
        let third = reparse(&second);
        assert_eq!(second, third);
    }
}

fuzz_target!(|data: &[u8]| parser(data));
