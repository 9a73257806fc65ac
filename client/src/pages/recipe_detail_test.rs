use super::*;

fn s(v: &str) -> Option<String> {
    Some(v.to_owned())
}

#[test]
fn reference_from_params_reads_local_id() {
    assert_eq!(reference_from_params(s("12"), None, None), Some(RecipeRef::Local(12)));
}

#[test]
fn reference_from_params_reads_external_pair() {
    assert_eq!(
        reference_from_params(None, s("spoonacular"), s("715538")),
        Some(RecipeRef::External { provider: "spoonacular".to_owned(), external_id: "715538".to_owned() })
    );
}

#[test]
fn reference_from_params_rejects_garbage() {
    assert_eq!(reference_from_params(s("abc"), None, None), None);
    assert_eq!(reference_from_params(None, s("spoonacular"), None), None);
    assert_eq!(reference_from_params(None, None, None), None);
}
