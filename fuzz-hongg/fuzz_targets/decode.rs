use std::net::IpAddr;

use honggfuzz::fuzz;
use time::OffsetDateTime;
use untext::{decode, decode_slice, parse};

fn main() {
    loop {
        fuzz!(|data: &[u8]| {
            let mut flag = false;
            let _ = decode(data, &mut flag);
            let mut small = 0i8;
            let _ = decode(data, &mut small);
            let mut wide = 0u128;
            let _ = decode(data, &mut wide);
            let mut float = 0f64;
            let _ = decode(data, &mut float);
            let mut inst = OffsetDateTime::UNIX_EPOCH;
            let _ = decode(data, &mut inst);
            let mut addr: Option<IpAddr> = None;
            let _ = decode(data, &mut addr);

            let mut text = String::new();
            if decode(data, &mut text).is_ok() {
                assert_eq!(text.as_bytes(), data);

                let mut nums: Vec<Option<i64>> = vec![Some(1)];
                let inputs: Vec<&str> = text.split(',').collect();
                match decode_slice(&inputs, &mut nums) {
                    Ok(()) => assert_eq!(nums.len(), inputs.len()),
                    Err(_) => assert_eq!(nums, [Some(1)]),
                }

                let mut num = 7i64;
                if parse(&text, &mut num).is_err() {
                    assert_eq!(num, 7);
                }
            }
        });
    }
}
