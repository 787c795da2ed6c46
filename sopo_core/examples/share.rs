use sopo_core::{render_result_page, Issuer, SigningKey, Verifier, DEFAULT_BASE_URL};

fn main() {
    // Sign a roll and classify the share link the way the result page does
    let key = SigningKey::new("example-secret").expect("non-empty secret");
    let token = Issuer::new(&key).issue("sptn").expect("common code");
    let verifier = Verifier::new(&key);
    let signed = verifier.classify("sptn", Some(&token)).expect("known code");
    let unsigned = verifier.classify("sptn", None).expect("known code");
    println!(
        "{}/result/sptn?{} -> {:?} / unsigned -> {:?}",
        DEFAULT_BASE_URL,
        token.query_string(),
        signed.outcome,
        unsigned.outcome
    );
    println!("{}", render_result_page(&signed, DEFAULT_BASE_URL));
}
