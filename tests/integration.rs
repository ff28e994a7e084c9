//! Integration tests for wordlist-forge

use std::collections::HashSet;
use std::fs;

use wordlist_forge::{
    brute_force_generator, save_wordlist, stream_to_file, template_generator, Alphabet,
    BruteForceConfig, BruteForceGenerator, Charset, Mask, OutputFormat, SymbolExpansion,
    TemplateConfig, TemplateGenerator, WordSets, WordlistError,
};

fn lines(path: &std::path::Path) -> Vec<String> {
    fs::read_to_string(path)
        .unwrap()
        .lines()
        .map(|l| l.to_string())
        .collect()
}

#[test]
fn test_brute_force_file_has_every_combination_once() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("digits.txt");
    let config = BruteForceConfig {
        length: 3,
        charset: Charset::Digits,
        output: path.clone(),
        batch_size: 7,
        ..Default::default()
    };

    let mut generator = brute_force_generator(&config).unwrap();
    let written =
        stream_to_file(&mut generator, &path, OutputFormat::Plain, config.batch_size, None)
            .unwrap();
    assert_eq!(written, 1000);

    let out = lines(&path);
    assert_eq!(out.len(), 1000);
    let unique: HashSet<&String> = out.iter().collect();
    assert_eq!(unique.len(), 1000);
    assert!(out.iter().all(|l| l.len() == 3 && l.chars().all(|c| c.is_ascii_digit())));
    // digits alphabet order coincides with numeric order
    let expected: Vec<String> = (0..1000).map(|n| format!("{:03}", n)).collect();
    assert_eq!(out, expected);
}

#[test]
fn test_brute_force_order_follows_custom_alphabet() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("ab.txt");
    let config = BruteForceConfig {
        length: 2,
        alphabet: Some("AB".to_string()),
        output: path.clone(),
        ..Default::default()
    };

    let mut generator = brute_force_generator(&config).unwrap();
    stream_to_file(&mut generator, &path, OutputFormat::Plain, config.batch_size, None).unwrap();
    assert_eq!(fs::read_to_string(&path).unwrap(), "AA\nAB\nBA\nBB\n");
}

#[test]
fn test_brute_force_full_charset_ordering() {
    let generator = BruteForceGenerator::new(Alphabet::from(Charset::Full), 2).unwrap();
    let all: Vec<String> = generator.collect();
    assert_eq!(all.len(), 67 * 67);
    assert_eq!(all[0], "AA");
    assert_eq!(all[1], "AB");
    assert_eq!(all[66], "A%");
    assert_eq!(all[67], "BA");
    assert_eq!(all.last().map(String::as_str), Some("%%"));
}

#[test]
fn test_brute_force_zero_length_is_rejected_before_io() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("never.txt");
    let config = BruteForceConfig {
        length: 0,
        output: path.clone(),
        ..Default::default()
    };

    let err = brute_force_generator(&config).err().unwrap();
    assert!(matches!(err, WordlistError::Validation { .. }));
    assert!(!path.exists());
}

#[test]
fn test_brute_force_resume_produces_suffix() {
    let full: Vec<String> = BruteForceGenerator::new(Alphabet::from(Charset::Lower), 2)
        .unwrap()
        .collect();

    let config = BruteForceConfig {
        length: 2,
        charset: Charset::Lower,
        start_index: 600,
        ..Default::default()
    };
    let resumed: Vec<String> = brute_force_generator(&config).unwrap().collect();
    assert_eq!(resumed, full[600..].to_vec());
}

#[test]
fn test_template_default_output_shape() {
    let generator = TemplateGenerator::with_defaults();
    let words = generator.generate();

    assert_eq!(words.len(), 12_852);
    assert!(words.windows(2).all(|w| w[0] < w[1]), "output must be sorted and unique");
    for word in &words {
        assert!(generator.classify(word).is_some(), "{} matches no mask", word);
    }
    assert!(words.contains(&"Aa12345".to_string()));
    assert!(words.contains(&"Admin@#123456".to_string()));
    assert!(words.contains(&"Zz987654321##".to_string()));
    assert!(!words.contains(&"Aa12345!@".to_string()));
}

#[test]
fn test_template_product_expansion_is_superset() {
    let generate = |expansion| {
        TemplateGenerator::new(WordSets::default(), Mask::ALL.to_vec(), expansion)
            .unwrap()
            .generate()
    };
    let listed = generate(SymbolExpansion::Listed);
    let product = generate(SymbolExpansion::Product);

    let product_set: HashSet<&String> = product.iter().collect();
    assert!(listed.iter().all(|w| product_set.contains(w)));
    assert!(product.contains(&"Aa12345!@".to_string()));
    assert!(product.len() > listed.len());
}

#[test]
fn test_template_runs_are_byte_identical() {
    let dir = tempfile::tempdir().unwrap();
    let first = dir.path().join("a.txt");
    let second = dir.path().join("b.txt");

    let config = TemplateConfig::default();
    let words = template_generator(&config).unwrap().generate();
    save_wordlist(&words, &first).unwrap();
    let words = template_generator(&config).unwrap().generate();
    save_wordlist(&words, &second).unwrap();

    assert_eq!(fs::read(&first).unwrap(), fs::read(&second).unwrap());
}

#[test]
fn test_template_csv_rows_are_bare_values() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("list.csv");

    let words = TemplateGenerator::with_defaults().generate();
    let (format, written) = save_wordlist(&words, &path).unwrap();
    assert_eq!(format, OutputFormat::Csv);
    assert_eq!(written as usize, words.len());

    let content = fs::read_to_string(&path).unwrap();
    let rows: Vec<&str> = content.split_terminator("\r\n").collect();
    assert_eq!(rows.len(), words.len());
    assert!(rows.iter().zip(&words).all(|(row, word)| row == word));
}

#[test]
fn test_template_custom_wordsets_file() {
    let dir = tempfile::tempdir().unwrap();
    let sets_path = dir.path().join("sets.json");
    fs::write(
        &sets_path,
        r#"{"prefixes": ["Root"], "numbers": ["1", "2"],
            "symbols": ["!"], "symbol_pairs": ["!!"]}"#,
    )
    .unwrap();

    let config = TemplateConfig {
        wordsets: Some(sets_path),
        masks: vec![Mask::PrefixNumber, Mask::PrefixNumberSymbolPair],
        ..Default::default()
    };
    let words = template_generator(&config).unwrap().generate();
    assert_eq!(words, vec!["Root1", "Root1!!", "Root2", "Root2!!"]);
}

#[test]
fn test_error_handling() {
    let error = WordlistError::validation("test error".to_string());
    assert!(error.to_string().contains("test error"));

    let error = WordlistError::io("disk full", Some("out.txt".to_string()));
    assert!(error.to_string().contains("disk full"));
    assert!(error.user_message().contains("out.txt"));

    let error = WordlistError::internal("internal error");
    assert!(error.to_string().contains("internal error"));
}

#[test]
fn test_library_initialization() {
    // Test that the library can be initialized without panicking
    let result = wordlist_forge::init();
    assert!(result.is_ok());
}
