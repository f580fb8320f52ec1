use c6461asm::{assemble_program, assemble_with_options, AsmError, AssemblerOptions, UnresolvedPolicy};

#[test]
fn label_on_halt() {
    let assembly = assemble_program("LOOP: HLT").unwrap();
    assert_eq!(assembly.symbols.get("LOOP"), Some(0));
    assert_eq!(assembly.listing(), "000000 000000 LOOP: HLT\n");
    assert_eq!(assembly.object(), "000000 000000\n");
}

#[test]
fn origin_then_add() {
    let assembly = assemble_program("LOC 5\nADD 1,2,10").unwrap();
    assert_eq!(assembly.listing(), "000005 010612 ADD 1,2,10\n");
    assert_eq!(assembly.object(), "000005 010612\n");
}

#[test]
fn data_literal() {
    let assembly = assemble_program("Data 7").unwrap();
    assert_eq!(assembly.listing(), "000000 000007 Data 7\n");
    assert_eq!(assembly.object(), "000000 000007\n");
}

#[test]
fn undefined_symbol_is_not_an_error() {
    let assembly = assemble_program("ADD 1,2,UNDEF").unwrap();
    assert_eq!(assembly.records[0].word & 0b11111, 0);
    assert_eq!(assembly.object(), "000000 010600\n");
}

#[test]
fn strict_undefined_symbol() {
    let options = AssemblerOptions {
        unresolved: UnresolvedPolicy::Error,
    };
    let err = assemble_with_options("ADD 1,2,UNDEF", options).unwrap_err();
    assert_eq!(
        err,
        AsmError::UnresolvedSymbol {
            line: 1,
            symbol: "UNDEF".into()
        }
    );
    assert_eq!(err.to_string(), "line 1: undefined symbol UNDEF");
}

#[test]
fn comments_and_blank_lines_take_no_space() {
    let assembly = assemble_program("; start\n\nHLT\n   ; more\nData 1\n").unwrap();
    let addresses: Vec<u16> = assembly.records.iter().map(|r| r.address).collect();
    assert_eq!(addresses, vec![0, 1]);
}

#[test]
fn redefined_label_uses_last_definition() {
    let assembly = assemble_program("A: HLT\nA: HLT\nData A").unwrap();
    assert_eq!(assembly.symbols.get("A"), Some(1));
    assert_eq!(assembly.records[2].word, 1);
}

#[test]
fn invalid_mnemonic_names_line_and_token() {
    let err = assemble_program(include_str!("../programs/bad_mnemonic.asm")).unwrap_err();
    assert_eq!(
        err,
        AsmError::InvalidMnemonic {
            line: 5,
            mnemonic: "JMP".into()
        }
    );
    assert_eq!(err.to_string(), "line 5: invalid instruction JMP");
}

#[test]
fn empty_program() {
    let assembly = assemble_program("; nothing here\n").unwrap();
    assert!(assembly.records.is_empty());
    assert!(assembly.symbols.is_empty());
    assert_eq!(assembly.listing(), "");
}
