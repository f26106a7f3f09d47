use dd_iban::validate;

// BE and NL reference IBANs: two valid, then each with one digit changed
const DEFAULT_IBANS: &[&str] = &[
    "BE26068900994429",
    "NL91ABNA0417164300",
    "BE26068900991429",
    "NL91ABNA0417162300",
];

fn main() {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let ibans: Vec<&str> = if args.is_empty() {
        DEFAULT_IBANS.to_vec()
    } else {
        args.iter().map(String::as_str).collect()
    };

    for iban in ibans {
        println!("{iban}: {}", validate(iban));
    }
}
