use super::*;

#[test]
fn no_command_is_none() {
    let cli = Cli::try_parse_from(["hivaas"]).expect("expected valid cli args");
    assert!(cli.command.is_none());
}

#[test]
fn parses_list_defaults() {
    let cli = Cli::try_parse_from(["hivaas", "list"]).expect("expected valid cli args");
    assert!(matches!(
        cli.command,
        Some(Commands::List {
            ref sizes,
            ref types,
            keyword: None,
            sort: SortArg::None,
            page: 1,
            json: false,
        }) if sizes.is_empty() && types.is_empty()
    ));
}

#[test]
fn parses_list_with_repeated_filters() {
    let cli = Cli::try_parse_from([
        "hivaas",
        "list",
        "--size",
        "m",
        "--size",
        "2XL",
        "--type",
        "Saree",
        "--keyword",
        "silk",
        "--sort",
        "high-to-low",
        "--page",
        "3",
        "--json",
    ])
    .expect("expected valid cli args");

    match cli.command {
        Some(Commands::List {
            sizes,
            types,
            keyword,
            sort,
            page,
            json,
        }) => {
            assert_eq!(sizes, vec![Size::M, Size::Xxl]);
            assert_eq!(types, vec!["Saree".to_string()]);
            assert_eq!(keyword.as_deref(), Some("silk"));
            assert_eq!(SortOption::from(sort), SortOption::PriceDescending);
            assert_eq!(page, 3);
            assert!(json);
        }
        other => panic!("unexpected command: {other:?}"),
    }
}

#[test]
fn list_rejects_unknown_size() {
    assert!(Cli::try_parse_from(["hivaas", "list", "--size", "XXL"]).is_err());
}

#[test]
fn list_rejects_unknown_sort() {
    assert!(Cli::try_parse_from(["hivaas", "list", "--sort", "cheapest"]).is_err());
}

#[test]
fn parses_types_command() {
    let cli = Cli::try_parse_from(["hivaas", "types"]).expect("expected valid cli args");
    assert!(matches!(cli.command, Some(Commands::Types)));
}

#[test]
fn parses_share_items() {
    let cli = Cli::try_parse_from(["hivaas", "share", "--item", "A=M,L", "--item", "B=S"])
        .expect("expected valid cli args");
    assert!(matches!(
        cli.command,
        Some(Commands::Share { ref items }) if items == &["A=M,L".to_string(), "B=S".to_string()]
    ));
}

#[test]
fn share_requires_an_item() {
    assert!(Cli::try_parse_from(["hivaas", "share"]).is_err());
}

#[test]
fn parses_browse_command() {
    let cli = Cli::try_parse_from(["hivaas", "browse"]).expect("expected valid cli args");
    assert!(matches!(cli.command, Some(Commands::Browse)));
}

#[test]
fn sort_arg_maps_to_sort_option() {
    assert_eq!(SortOption::from(SortArg::None), SortOption::None);
    assert_eq!(SortOption::from(SortArg::LowToHigh), SortOption::PriceAscending);
}
