// This is a part of rust-encoding.
// Copyright (c) 2014-2015, Kang Seonghoon.
// See README.md and LICENSE.txt for details.

use std::env;
use std::fs::File;
use std::io::{self, Read, Write};
use std::process;

use encoding_legacy::all::{self, encodings};
use encoding_legacy::{DecoderTrap, EncoderTrap, EncodingRef};
use getopts::Options;

fn encoding_from_name(name: &str) -> Option<EncodingRef> {
    encodings().iter().copied().find(|e| e.name().eq_ignore_ascii_case(name))
}

fn fail(message: String) -> ! {
    eprintln!("recode: {}", message);
    process::exit(1);
}

fn main() {
    env_logger::init();
    let args: Vec<String> = env::args().collect();

    let mut opts = Options::new();
    opts.optopt("f", "from", "set input encoding (default iso-8859-1)", "NAME");
    opts.optopt("t", "to", "set output encoding (default iso-8859-1)", "NAME");
    opts.optopt("e", "error-policy",
                "set error policy (one of strict, ignore, replace, ncr)", "POLICY");
    opts.optopt("o", "output", "output file", "FILE");
    opts.optflag("l", "list", "list the available encodings");
    opts.optflag("h", "help", "print this help menu");

    let matches = match opts.parse(&args[1..]) {
        Ok(m) => m,
        Err(e) => fail(e.to_string()),
    };
    if matches.opt_present("h") {
        println!("{}", opts.usage("Converts the character encoding of a file or the standard input."));
        return;
    }
    if matches.opt_present("l") {
        for encoding in encodings() {
            println!("{}", encoding.name());
        }
        return;
    }

    let lookup = |opt: &str| -> EncodingRef {
        match matches.opt_str(opt) {
            Some(name) => match encoding_from_name(&name) {
                Some(encoding) => encoding,
                None => fail(format!("unknown encoding {}", name)),
            },
            None => &all::ISO_8859_1,
        }
    };
    let inenc = lookup("f");
    let outenc = lookup("t");

    let (intrap, outtrap) = match matches.opt_str("e").as_deref() {
        Some("strict") | None => (DecoderTrap::Strict, EncoderTrap::Strict),
        Some("ignore") => (DecoderTrap::Ignore, EncoderTrap::Ignore),
        Some("replace") => (DecoderTrap::Replace, EncoderTrap::Replace),
        Some("ncr") => (DecoderTrap::Replace, EncoderTrap::NcrEscape),
        Some(s) => fail(format!("invalid error policy {}", s)),
    };

    let mut input = Vec::new();
    let read = match matches.free.first().map(|s| &s[..]) {
        Some("-") | None => io::stdin().read_to_end(&mut input),
        Some(f) => File::open(f).and_then(|mut file| file.read_to_end(&mut input)),
    };
    if let Err(e) = read {
        fail(format!("cannot read the input: {}", e));
    }

    let decoded = match inenc.decode(&input, intrap) {
        Ok(s) => s,
        Err(e) => fail(format!("{} decoder error: {}", inenc.name(), e)),
    };
    let encoded = match outenc.encode(&decoded, outtrap) {
        Ok(v) => v,
        Err(e) => fail(format!("{} encoder error: {}", outenc.name(), e)),
    };

    let written = match matches.opt_str("o").as_deref() {
        Some("-") | None => io::stdout().write_all(&encoded),
        Some(f) => File::create(f).and_then(|mut file| file.write_all(&encoded)),
    };
    if let Err(e) = written {
        fail(format!("cannot write the output: {}", e));
    }
}
