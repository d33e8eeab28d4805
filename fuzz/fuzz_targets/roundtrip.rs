use honggfuzz::fuzz;

fn main() {
    loop {
        fuzz!(|data: &[u8]| {
            let encoded = huffpack::encode(data).expect("fuzz inputs fit the size header");
            let decoded = huffpack::decode(&encoded).expect("encoder output must decode");
            assert_eq!(decoded, data);
        });
    }
}
